use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::report::{AttachmentDto, ReportDto, ReportRequest},
    server::{
        data::{
            attachment::{AttachmentRepository, NewAttachment},
            equipment::EquipmentRepository,
            farm::FarmRepository,
            report::ReportRepository,
        },
        error::Error,
        model::db::{AttachmentModel, ReportModel},
        service::validate,
        util::storage::{delete_all, put_all, BlobStore, UploadedFile},
    },
};

impl From<AttachmentModel> for AttachmentDto {
    fn from(attachment: AttachmentModel) -> Self {
        Self {
            id: attachment.id,
            report_id: attachment.report_id,
            file_name: attachment.file_name,
            content_type: attachment.content_type,
            size_bytes: attachment.size_bytes,
            created_at: attachment.created_at,
        }
    }
}

/// Issue reports and their attachments.
///
/// Attachment blobs live in the [`BlobStore`]; rows and blobs are kept in step so a failed
/// upload leaves neither behind and deleting a report removes its files.
pub struct ReportService<'a, S: BlobStore> {
    db: &'a DatabaseConnection,
    storage: &'a S,
}

impl<'a, S: BlobStore> ReportService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a S) -> Self {
        Self { db, storage }
    }

    /// Lists reports newest first, each with its attachments
    pub async fn list(&self) -> Result<Vec<ReportDto>, Error> {
        let reports = ReportRepository::new(self.db).list().await?;
        let ids: Vec<i32> = reports.iter().map(|report| report.id).collect();

        let mut attachments: HashMap<i32, Vec<AttachmentDto>> = HashMap::new();
        for attachment in AttachmentRepository::new(self.db)
            .list_for_reports(&ids)
            .await?
        {
            attachments
                .entry(attachment.report_id)
                .or_default()
                .push(attachment.into());
        }

        let names = self.names().await?;

        reports
            .into_iter()
            .map(|report| {
                let report_attachments = attachments.remove(&report.id).unwrap_or_default();
                Self::dto(report, &names, report_attachments)
            })
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<ReportDto, Error> {
        let report = self.find(id).await?;

        self.to_dto(report).await
    }

    pub async fn create(
        &self,
        report: ReportRequest,
        reported_by: Option<i32>,
    ) -> Result<ReportDto, Error> {
        let report = self.validate(report).await?;
        let created = ReportRepository::new(self.db)
            .create(report, reported_by)
            .await?;

        tracing::info!("Report {} filed for farm {}", created.id, created.farm_id);

        self.to_dto(created).await
    }

    pub async fn update(&self, id: i32, report: ReportRequest) -> Result<ReportDto, Error> {
        let report = self.validate(report).await?;
        let updated = ReportRepository::new(self.db)
            .update(id, report)
            .await?
            .ok_or_else(|| Error::not_found("Report", id))?;

        self.to_dto(updated).await
    }

    /// Deletes a report with its attachments, then removes the attachment blobs
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.find(id).await?;

        let keys: Vec<String> = AttachmentRepository::new(self.db)
            .list_for_report(id)
            .await?
            .into_iter()
            .map(|attachment| attachment.storage_key)
            .collect();

        let txn = self.db.begin().await?;
        AttachmentRepository::new(&txn).delete_for_report(id).await?;
        ReportRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        delete_all(self.storage, &keys).await;

        Ok(())
    }

    /// Stores uploaded files and attaches them to a report
    ///
    /// Either every file is stored and recorded or none is.
    pub async fn add_attachments(
        &self,
        report_id: i32,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<AttachmentDto>, Error> {
        if files.is_empty() {
            return Err(Error::validation("No files were uploaded"));
        }
        self.find(report_id).await?;

        let keys = put_all(self.storage, &files).await?;

        match self.insert_attachments(report_id, &files, &keys).await {
            Ok(attachments) => {
                tracing::info!(
                    "Stored {} attachment(s) for report {}",
                    attachments.len(),
                    report_id
                );

                Ok(attachments.into_iter().map(AttachmentDto::from).collect())
            }
            Err(e) => {
                delete_all(self.storage, &keys).await;

                Err(e)
            }
        }
    }

    /// Returns an attachment's metadata and contents
    pub async fn download_attachment(
        &self,
        id: i32,
    ) -> Result<(AttachmentModel, Vec<u8>), Error> {
        let attachment = AttachmentRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Attachment", id))?;

        let bytes = self.storage.get(&attachment.storage_key).await?;

        Ok((attachment, bytes))
    }

    async fn insert_attachments(
        &self,
        report_id: i32,
        files: &[UploadedFile],
        keys: &[String],
    ) -> Result<Vec<AttachmentModel>, Error> {
        let txn = self.db.begin().await?;
        let repo = AttachmentRepository::new(&txn);

        let mut attachments = Vec::with_capacity(files.len());
        for (file, key) in files.iter().zip(keys) {
            let attachment = repo
                .create(NewAttachment {
                    report_id,
                    file_name: file.file_name.clone(),
                    content_type: file.content_type.clone(),
                    size_bytes: file.size_bytes(),
                    storage_key: key.clone(),
                })
                .await?;
            attachments.push(attachment);
        }

        txn.commit().await?;

        Ok(attachments)
    }

    async fn find(&self, id: i32) -> Result<ReportModel, Error> {
        ReportRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Report", id))
    }

    async fn to_dto(&self, report: ReportModel) -> Result<ReportDto, Error> {
        let attachments = AttachmentRepository::new(self.db)
            .list_for_report(report.id)
            .await?
            .into_iter()
            .map(AttachmentDto::from)
            .collect();
        let names = self.names().await?;

        Self::dto(report, &names, attachments)
    }

    async fn names(&self) -> Result<Names, Error> {
        let farms = FarmRepository::new(self.db).name_map().await?;
        let equipment = EquipmentRepository::new(self.db)
            .list(None)
            .await?
            .into_iter()
            .map(|equipment| (equipment.id, equipment.name))
            .collect();

        Ok(Names { farms, equipment })
    }

    fn dto(
        report: ReportModel,
        names: &Names,
        attachments: Vec<AttachmentDto>,
    ) -> Result<ReportDto, Error> {
        Ok(ReportDto {
            id: report.id,
            farm_id: report.farm_id,
            farm_name: names.farms.get(&report.farm_id).cloned(),
            equipment_id: report.equipment_id,
            equipment_name: report
                .equipment_id
                .and_then(|id| names.equipment.get(&id).cloned()),
            supplier_id: report.supplier_id,
            urgency: report.urgency.parse()?,
            status: report.status.parse()?,
            title: report.title,
            description: report.description,
            reported_by: report.reported_by,
            attachments,
            created_at: report.created_at,
            updated_at: report.updated_at,
        })
    }

    /// Trims text and checks that referenced equipment belongs to the report's farm
    async fn validate(&self, report: ReportRequest) -> Result<ReportRequest, Error> {
        if let Some(equipment_id) = report.equipment_id {
            let equipment = EquipmentRepository::new(self.db)
                .get(equipment_id)
                .await?
                .ok_or_else(|| Error::not_found("Equipment", equipment_id))?;

            if equipment.farm_id != report.farm_id {
                return Err(Error::validation(format!(
                    "Equipment {} does not belong to farm {}",
                    equipment.name, report.farm_id
                )));
            }
        }

        Ok(ReportRequest {
            title: validate::required("Title", &report.title)?,
            description: report.description.trim().to_string(),
            ..report
        })
    }
}

struct Names {
    farms: HashMap<i32, String>,
    equipment: HashMap<i32, String>,
}
