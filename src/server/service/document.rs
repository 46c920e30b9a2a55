use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::document::{
        DocumentCategoryDto, DocumentCategoryRequest, DocumentDto, DocumentUpdateRequest,
    },
    server::{
        data::{
            document::{DocumentRepository, NewDocument},
            document_category::DocumentCategoryRepository,
            farm::FarmRepository,
        },
        error::Error,
        model::db::{DocumentCategoryModel, DocumentModel},
        service::validate,
        util::storage::{delete_all, put_all, BlobStore, UploadedFile},
    },
};

impl From<DocumentCategoryModel> for DocumentCategoryDto {
    fn from(category: DocumentCategoryModel) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
        }
    }
}

pub struct DocumentCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<DocumentCategoryDto>, Error> {
        let categories = DocumentCategoryRepository::new(self.db).list().await?;

        Ok(categories.into_iter().map(DocumentCategoryDto::from).collect())
    }

    pub async fn create(
        &self,
        category: DocumentCategoryRequest,
    ) -> Result<DocumentCategoryDto, Error> {
        let category = Self::validate(category)?;

        Ok(DocumentCategoryRepository::new(self.db)
            .create(category)
            .await?
            .into())
    }

    pub async fn update(
        &self,
        id: i32,
        category: DocumentCategoryRequest,
    ) -> Result<DocumentCategoryDto, Error> {
        let category = Self::validate(category)?;

        DocumentCategoryRepository::new(self.db)
            .update(id, category)
            .await?
            .map(DocumentCategoryDto::from)
            .ok_or_else(|| Error::not_found("Document category", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = DocumentCategoryRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Document category", id));
        }

        Ok(())
    }

    fn validate(category: DocumentCategoryRequest) -> Result<DocumentCategoryRequest, Error> {
        Ok(DocumentCategoryRequest {
            name: validate::required("Category name", &category.name)?,
            description: validate::optional(category.description),
        })
    }
}

/// Metadata sent alongside uploaded document files
#[derive(Clone, Debug, Default)]
pub struct DocumentUpload {
    pub title: Option<String>,
    pub farm_id: Option<i32>,
    pub category_id: Option<i32>,
    pub uploaded_by: Option<i32>,
}

/// Uploaded documents, stored as blobs with their metadata in the database.
pub struct DocumentService<'a, S: BlobStore> {
    db: &'a DatabaseConnection,
    storage: &'a S,
}

impl<'a, S: BlobStore> DocumentService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a S) -> Self {
        Self { db, storage }
    }

    pub async fn list(&self) -> Result<Vec<DocumentDto>, Error> {
        let farm_names = FarmRepository::new(self.db).name_map().await?;
        let category_names = DocumentCategoryRepository::new(self.db).name_map().await?;

        Ok(DocumentRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(|document| {
                let farm_name = document.farm_id.and_then(|id| farm_names.get(&id).cloned());
                let category_name = document
                    .category_id
                    .and_then(|id| category_names.get(&id).cloned());
                Self::dto(document, farm_name, category_name)
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<DocumentDto, Error> {
        let document = self.find(id).await?;

        self.to_dto(document).await
    }

    /// Stores each uploaded file as its own document
    ///
    /// The title applies to a single upload; with several files each document is titled
    /// after its file name. Either all documents are stored or none is.
    pub async fn upload(
        &self,
        upload: DocumentUpload,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<DocumentDto>, Error> {
        if files.is_empty() {
            return Err(Error::validation("No files were uploaded"));
        }
        let title = validate::optional(upload.title.clone()).filter(|_| files.len() == 1);

        let keys = put_all(self.storage, &files).await?;

        let documents = match self.insert_documents(&upload, title, &files, &keys).await {
            Ok(documents) => documents,
            Err(e) => {
                delete_all(self.storage, &keys).await;

                return Err(e);
            }
        };

        tracing::info!("Stored {} document(s)", documents.len());

        let mut dtos = Vec::with_capacity(documents.len());
        for document in documents {
            dtos.push(self.to_dto(document).await?);
        }

        Ok(dtos)
    }

    pub async fn update(
        &self,
        id: i32,
        document: DocumentUpdateRequest,
    ) -> Result<DocumentDto, Error> {
        let document = DocumentUpdateRequest {
            title: validate::required("Title", &document.title)?,
            ..document
        };

        let updated = DocumentRepository::new(self.db)
            .update(id, document)
            .await?
            .ok_or_else(|| Error::not_found("Document", id))?;

        self.to_dto(updated).await
    }

    /// Deletes the document row, then its blob
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let document = self.find(id).await?;

        DocumentRepository::new(self.db).delete(id).await?;
        delete_all(self.storage, &[document.storage_key]).await;

        Ok(())
    }

    /// Returns a document's metadata and file contents
    pub async fn download(&self, id: i32) -> Result<(DocumentModel, Vec<u8>), Error> {
        let document = self.find(id).await?;
        let bytes = self.storage.get(&document.storage_key).await?;

        Ok((document, bytes))
    }

    async fn insert_documents(
        &self,
        upload: &DocumentUpload,
        title: Option<String>,
        files: &[UploadedFile],
        keys: &[String],
    ) -> Result<Vec<DocumentModel>, Error> {
        let txn = self.db.begin().await?;
        let repo = DocumentRepository::new(&txn);

        let mut documents = Vec::with_capacity(files.len());
        for (file, key) in files.iter().zip(keys) {
            let document = repo
                .create(NewDocument {
                    title: title.clone().unwrap_or_else(|| file.file_name.clone()),
                    farm_id: upload.farm_id,
                    category_id: upload.category_id,
                    file_name: file.file_name.clone(),
                    content_type: file.content_type.clone(),
                    size_bytes: file.size_bytes(),
                    storage_key: key.clone(),
                    uploaded_by: upload.uploaded_by,
                })
                .await?;
            documents.push(document);
        }

        txn.commit().await?;

        Ok(documents)
    }

    async fn find(&self, id: i32) -> Result<DocumentModel, Error> {
        DocumentRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Document", id))
    }

    async fn to_dto(&self, document: DocumentModel) -> Result<DocumentDto, Error> {
        let farm_name = match document.farm_id {
            Some(farm_id) => FarmRepository::new(self.db)
                .get(farm_id)
                .await?
                .map(|farm| farm.name),
            None => None,
        };
        let category_name = match document.category_id {
            Some(category_id) => DocumentCategoryRepository::new(self.db)
                .get(category_id)
                .await?
                .map(|category| category.name),
            None => None,
        };

        Ok(Self::dto(document, farm_name, category_name))
    }

    fn dto(
        document: DocumentModel,
        farm_name: Option<String>,
        category_name: Option<String>,
    ) -> DocumentDto {
        DocumentDto {
            id: document.id,
            farm_id: document.farm_id,
            farm_name,
            category_id: document.category_id,
            category_name,
            title: document.title,
            file_name: document.file_name,
            content_type: document.content_type,
            size_bytes: document.size_bytes,
            uploaded_by: document.uploaded_by,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;

    use super::*;
    use crate::server::{
        error::domain::DomainError,
        util::storage::{FailingBlobStore, FsBlobStore},
    };

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: "application/pdf".to_string(),
            bytes: b"%PDF".to_vec(),
        }
    }

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_all_tables()
            .with_farm("North Farm")
            .build()
            .await
    }

    mod upload {
        use super::*;

        /// Expect a single upload to use the given title and resolve names
        #[tokio::test]
        async fn single_file_uses_title() -> Result<(), TestError> {
            let test = setup().await?;
            let category = test.document().insert_category("Certificates").await?;
            let store = FsBlobStore::open(test.storage_path()).await.unwrap();
            let service = DocumentService::new(&test.db, &store);

            let documents = service
                .upload(
                    DocumentUpload {
                        title: Some("Organic certificate".to_string()),
                        farm_id: Some(1),
                        category_id: Some(category.id),
                        uploaded_by: None,
                    },
                    vec![file("cert.pdf")],
                )
                .await
                .unwrap();

            assert_eq!(documents.len(), 1);
            assert_eq!(documents[0].title, "Organic certificate");
            assert_eq!(documents[0].farm_name.as_deref(), Some("North Farm"));
            assert_eq!(documents[0].category_name.as_deref(), Some("Certificates"));

            Ok(())
        }

        /// Expect several files to be titled after their file names
        #[tokio::test]
        async fn multiple_files_use_file_names() -> Result<(), TestError> {
            let test = setup().await?;
            let store = FsBlobStore::open(test.storage_path()).await.unwrap();
            let service = DocumentService::new(&test.db, &store);

            let documents = service
                .upload(
                    DocumentUpload {
                        title: Some("Ignored".to_string()),
                        ..Default::default()
                    },
                    vec![file("a.pdf"), file("b.pdf")],
                )
                .await
                .unwrap();

            assert_eq!(documents[0].title, "a.pdf");
            assert_eq!(documents[1].title, "b.pdf");

            Ok(())
        }

        /// Expect nothing to be stored when the database rejects the rows
        #[tokio::test]
        async fn removes_blobs_when_insert_fails() -> Result<(), TestError> {
            let test = setup().await?;
            let store = FsBlobStore::open(test.storage_path()).await.unwrap();
            let service = DocumentService::new(&test.db, &store);

            let result = service
                .upload(
                    DocumentUpload {
                        category_id: Some(42),
                        ..Default::default()
                    },
                    vec![file("a.pdf")],
                )
                .await;

            assert!(matches!(result, Err(Error::DbErr(_))));
            assert_eq!(std::fs::read_dir(test.storage_path())?.count(), 0);

            Ok(())
        }

        /// Expect no rows when a blob can't be stored
        #[tokio::test]
        async fn stores_no_rows_when_blob_fails() -> Result<(), TestError> {
            let test = setup().await?;
            let store = FailingBlobStore {
                inner: FsBlobStore::open(test.storage_path()).await.unwrap(),
                fail_on: "b.pdf".to_string(),
            };
            let service = DocumentService::new(&test.db, &store);

            let result = service
                .upload(DocumentUpload::default(), vec![file("a.pdf"), file("b.pdf")])
                .await;

            assert!(matches!(result, Err(Error::StorageError(_))));
            assert!(service.list().await.unwrap().is_empty());

            Ok(())
        }

        /// Expect a validation error for an upload without files
        #[tokio::test]
        async fn requires_files() -> Result<(), TestError> {
            let test = setup().await?;
            let store = FsBlobStore::open(test.storage_path()).await.unwrap();
            let service = DocumentService::new(&test.db, &store);

            let result = service.upload(DocumentUpload::default(), Vec::new()).await;

            assert!(matches!(
                result,
                Err(Error::DomainError(DomainError::Validation(_)))
            ));

            Ok(())
        }
    }

    /// Expect delete to remove the blob so downloads fail afterwards
    #[tokio::test]
    async fn delete_removes_blob() -> Result<(), TestError> {
        let test = setup().await?;
        let store = FsBlobStore::open(test.storage_path()).await.unwrap();
        let service = DocumentService::new(&test.db, &store);
        let documents = service
            .upload(DocumentUpload::default(), vec![file("a.pdf")])
            .await
            .unwrap();
        let (_, bytes) = service.download(documents[0].id).await.unwrap();
        assert_eq!(bytes, b"%PDF".to_vec());

        service.delete(documents[0].id).await.unwrap();

        assert!(matches!(
            service.download(documents[0].id).await,
            Err(Error::DomainError(DomainError::NotFound { .. }))
        ));
        assert_eq!(std::fs::read_dir(test.storage_path())?.count(), 0);

        Ok(())
    }
}
