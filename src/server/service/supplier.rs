use sea_orm::DatabaseConnection;

use crate::{
    model::supplier::{SupplierDto, SupplierRequest},
    server::{
        data::supplier::SupplierRepository, error::Error, model::db::SupplierModel,
        service::validate,
    },
};

impl From<SupplierModel> for SupplierDto {
    fn from(supplier: SupplierModel) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            contact_person: supplier.contact_person,
            email: supplier.email,
            phone: supplier.phone,
            address: supplier.address,
            notes: supplier.notes,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}

pub struct SupplierService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupplierService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<SupplierDto>, Error> {
        let suppliers = SupplierRepository::new(self.db).list().await?;

        Ok(suppliers.into_iter().map(SupplierDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<SupplierDto, Error> {
        SupplierRepository::new(self.db)
            .get(id)
            .await?
            .map(SupplierDto::from)
            .ok_or_else(|| Error::not_found("Supplier", id))
    }

    pub async fn create(&self, supplier: SupplierRequest) -> Result<SupplierDto, Error> {
        let supplier = Self::validate(supplier)?;

        Ok(SupplierRepository::new(self.db).create(supplier).await?.into())
    }

    pub async fn update(&self, id: i32, supplier: SupplierRequest) -> Result<SupplierDto, Error> {
        let supplier = Self::validate(supplier)?;

        SupplierRepository::new(self.db)
            .update(id, supplier)
            .await?
            .map(SupplierDto::from)
            .ok_or_else(|| Error::not_found("Supplier", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = SupplierRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Supplier", id));
        }

        Ok(())
    }

    fn validate(supplier: SupplierRequest) -> Result<SupplierRequest, Error> {
        let email = validate::optional(supplier.email);
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(Error::validation(format!(
                    "{:?} is not an email address",
                    email
                )));
            }
        }

        Ok(SupplierRequest {
            name: validate::required("Supplier name", &supplier.name)?,
            contact_person: validate::optional(supplier.contact_person),
            email,
            phone: validate::optional(supplier.phone),
            address: validate::optional(supplier.address),
            notes: validate::optional(supplier.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;
    use entity::prelude::*;

    use super::*;
    use crate::server::error::domain::DomainError;

    /// Expect a malformed email address to be rejected
    #[tokio::test]
    async fn rejects_malformed_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(Supplier).build().await?;
        let service = SupplierService::new(&test.db);

        let result = service
            .create(SupplierRequest {
                name: "Agri AS".to_string(),
                email: Some("sales at agri".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::DomainError(DomainError::Validation(_)))
        ));

        Ok(())
    }

    /// Expect suppliers to be listed alphabetically
    #[tokio::test]
    async fn lists_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(Supplier).build().await?;
        test.purchasing().insert_supplier("Vet Supplies", None).await?;
        test.purchasing().insert_supplier("Agri AS", None).await?;
        let service = SupplierService::new(&test.db);

        let suppliers = service.list().await.unwrap();

        assert_eq!(suppliers[0].name, "Agri AS");
        assert_eq!(suppliers[1].name, "Vet Supplies");

        Ok(())
    }
}
