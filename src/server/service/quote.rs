use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        order::format_amount,
        quote::{QuoteDto, QuoteRequest, QuoteStatus},
    },
    server::{
        data::{farm::FarmRepository, quote::QuoteRepository, supplier::SupplierRepository},
        error::Error,
        model::db::QuoteModel,
        service::validate,
        util::functions::{FunctionsClient, QuoteEmail},
    },
};

pub struct QuoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<QuoteDto>, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;
        let supplier_names = SupplierRepository::new(self.db).name_map().await?;

        QuoteRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(|quote| {
                let supplier_name = supplier_names.get(&quote.supplier_id).cloned();
                let farm_name = farm_names.get(&quote.farm_id).cloned();
                Self::dto(quote, supplier_name, farm_name)
            })
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<QuoteDto, Error> {
        let quote = self.find(id).await?;

        self.to_dto(quote).await
    }

    pub async fn create(&self, quote: QuoteRequest) -> Result<QuoteDto, Error> {
        let quote = Self::validate(quote)?;
        let created = QuoteRepository::new(self.db).create(quote).await?;

        self.to_dto(created).await
    }

    pub async fn update(&self, id: i32, quote: QuoteRequest) -> Result<QuoteDto, Error> {
        let quote = Self::validate(quote)?;
        let updated = QuoteRepository::new(self.db)
            .update(id, quote)
            .await?
            .ok_or_else(|| Error::not_found("Quote", id))?;

        self.to_dto(updated).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = QuoteRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Quote", id));
        }

        Ok(())
    }

    /// Emails the quote request to the supplier, then marks the quote as sent
    ///
    /// Only draft quotes and quotes already sent (a reminder to the supplier) can be sent. The
    /// status only changes once the email function succeeded.
    pub async fn send(&self, id: i32, functions: &FunctionsClient) -> Result<QuoteDto, Error> {
        let quote = self.find(id).await?;
        let status: QuoteStatus = quote.status.parse()?;
        if !matches!(status, QuoteStatus::Draft | QuoteStatus::Sent) {
            return Err(Error::validation(format!(
                "Quote {} is {} and can't be sent",
                id, status
            )));
        }

        let supplier = SupplierRepository::new(self.db)
            .get(quote.supplier_id)
            .await?
            .ok_or_else(|| Error::not_found("Supplier", quote.supplier_id))?;
        let Some(email) = supplier.email.filter(|email| !email.trim().is_empty()) else {
            return Err(Error::validation(format!(
                "Supplier {} has no email address",
                supplier.name
            )));
        };

        let farm = FarmRepository::new(self.db)
            .get(quote.farm_id)
            .await?
            .ok_or_else(|| Error::not_found("Farm", quote.farm_id))?;
        let farm_name = farm.company_name.unwrap_or(farm.name);

        functions
            .send_quote_email(&QuoteEmail {
                to: email,
                subject: format!("Quote request: {}", quote.title),
                body: Self::email_body(&quote, &farm_name),
                supplier_name: supplier.name,
                farm_name,
            })
            .await?;

        let sent = QuoteRepository::new(self.db)
            .mark_sent(id)
            .await?
            .ok_or_else(|| Error::not_found("Quote", id))?;

        tracing::info!("Quote {} sent to supplier {}", id, sent.supplier_id);

        self.to_dto(sent).await
    }

    fn email_body(quote: &QuoteModel, farm_name: &str) -> String {
        let mut body = format!("{} requests a quote for: {}\n", farm_name, quote.title);
        if let Some(description) = &quote.description {
            body.push_str(&format!("\n{}\n", description));
        }
        if let Some(amount) = quote.amount_minor {
            body.push_str(&format!(
                "\nEstimated amount: {}\n",
                format_amount(amount, &quote.currency)
            ));
        }
        if let Some(valid_until) = quote.valid_until {
            body.push_str(&format!("\nPlease reply before {}.\n", valid_until));
        }

        body
    }

    async fn find(&self, id: i32) -> Result<QuoteModel, Error> {
        QuoteRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Quote", id))
    }

    async fn to_dto(&self, quote: QuoteModel) -> Result<QuoteDto, Error> {
        let supplier_name = SupplierRepository::new(self.db)
            .get(quote.supplier_id)
            .await?
            .map(|supplier| supplier.name);
        let farm_name = FarmRepository::new(self.db)
            .get(quote.farm_id)
            .await?
            .map(|farm| farm.name);

        Self::dto(quote, supplier_name, farm_name)
    }

    fn dto(
        quote: QuoteModel,
        supplier_name: Option<String>,
        farm_name: Option<String>,
    ) -> Result<QuoteDto, Error> {
        Ok(QuoteDto {
            id: quote.id,
            supplier_id: quote.supplier_id,
            supplier_name,
            farm_id: quote.farm_id,
            farm_name,
            project_id: quote.project_id,
            status: quote.status.parse()?,
            title: quote.title,
            description: quote.description,
            amount_minor: quote.amount_minor,
            currency: quote.currency,
            valid_until: quote.valid_until,
            sent_at: quote.sent_at,
            created_at: quote.created_at,
            updated_at: quote.updated_at,
        })
    }

    fn validate(quote: QuoteRequest) -> Result<QuoteRequest, Error> {
        validate::non_negative("Amount", quote.amount_minor)?;

        Ok(QuoteRequest {
            title: validate::required("Title", &quote.title)?,
            description: validate::optional(quote.description),
            currency: validate::currency(&quote.currency)?,
            ..quote
        })
    }
}
