use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        farm::FarmDto,
        order::{OrderDto, OrderRequest},
        quote::QuoteStatus,
    },
    server::{
        data::{
            farm::FarmRepository, order::OrderRepository, quote::QuoteRepository,
            supplier::SupplierRepository,
        },
        error::Error,
        model::db::{OrderModel, QuoteModel},
        service::{order_document::OrderDocument, validate},
    },
};

/// A rendered order confirmation ready for download
pub struct RenderedOrder {
    pub file_name: String,
    pub html: String,
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<OrderDto>, Error> {
        let quotes: HashMap<i32, QuoteModel> = QuoteRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(|quote| (quote.id, quote))
            .collect();
        let supplier_names = SupplierRepository::new(self.db).name_map().await?;

        Ok(OrderRepository::new(self.db)
            .list()
            .await?
            .into_iter()
            .map(|order| {
                let quote = quotes.get(&order.quote_id);
                let supplier_name = quote
                    .and_then(|quote| supplier_names.get(&quote.supplier_id))
                    .cloned();
                Self::dto(order, quote, supplier_name)
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<OrderDto, Error> {
        let order = self.find(id).await?;

        self.to_dto(order).await
    }

    /// Records an order confirmation and marks its quote as accepted
    pub async fn create(&self, order: OrderRequest) -> Result<OrderDto, Error> {
        let order = Self::validate(order)?;

        let txn = self.db.begin().await?;
        QuoteRepository::new(&txn)
            .set_status(order.quote_id, QuoteStatus::Accepted)
            .await?
            .ok_or_else(|| Error::not_found("Quote", order.quote_id))?;
        let created = OrderRepository::new(&txn).create(order).await?;
        txn.commit().await?;

        tracing::info!(
            "Order {} created, quote {} accepted",
            created.order_number,
            created.quote_id
        );

        self.to_dto(created).await
    }

    /// Updates an order; moving it to another quote accepts that quote
    ///
    /// The previous quote keeps its status.
    pub async fn update(&self, id: i32, order: OrderRequest) -> Result<OrderDto, Error> {
        let order = Self::validate(order)?;

        let txn = self.db.begin().await?;
        let orders = OrderRepository::new(&txn);
        let existing = orders
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Order", id))?;
        if existing.quote_id != order.quote_id {
            QuoteRepository::new(&txn)
                .set_status(order.quote_id, QuoteStatus::Accepted)
                .await?
                .ok_or_else(|| Error::not_found("Quote", order.quote_id))?;
        }
        let updated = orders
            .update(id, order)
            .await?
            .ok_or_else(|| Error::not_found("Order", id))?;
        txn.commit().await?;

        self.to_dto(updated).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = OrderRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("Order", id));
        }

        Ok(())
    }

    /// Renders the printable confirmation for an order
    pub async fn document(&self, id: i32) -> Result<RenderedOrder, Error> {
        let order = self.find(id).await?;
        let quote = QuoteRepository::new(self.db)
            .get(order.quote_id)
            .await?
            .ok_or_else(|| Error::not_found("Quote", order.quote_id))?;
        let supplier = SupplierRepository::new(self.db)
            .get(quote.supplier_id)
            .await?
            .ok_or_else(|| Error::not_found("Supplier", quote.supplier_id))?;
        let farm: FarmDto = FarmRepository::new(self.db)
            .get(quote.farm_id)
            .await?
            .ok_or_else(|| Error::not_found("Farm", quote.farm_id))?
            .into();

        let document = OrderDocument {
            order: &order,
            quote: &quote,
            farm: &farm,
            supplier: &supplier,
        };

        Ok(RenderedOrder {
            file_name: document.file_name(),
            html: document.render(),
        })
    }

    async fn find(&self, id: i32) -> Result<OrderModel, Error> {
        OrderRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Order", id))
    }

    async fn to_dto(&self, order: OrderModel) -> Result<OrderDto, Error> {
        let quote = QuoteRepository::new(self.db).get(order.quote_id).await?;
        let supplier_name = match &quote {
            Some(quote) => SupplierRepository::new(self.db)
                .get(quote.supplier_id)
                .await?
                .map(|supplier| supplier.name),
            None => None,
        };

        Ok(Self::dto(order, quote.as_ref(), supplier_name))
    }

    fn dto(
        order: OrderModel,
        quote: Option<&QuoteModel>,
        supplier_name: Option<String>,
    ) -> OrderDto {
        OrderDto {
            id: order.id,
            quote_id: order.quote_id,
            quote_title: quote.map(|quote| quote.title.clone()),
            farm_id: quote.map(|quote| quote.farm_id),
            supplier_id: quote.map(|quote| quote.supplier_id),
            supplier_name,
            order_number: order.order_number,
            order_date: order.order_date,
            delivery_date: order.delivery_date,
            delivery_address: order.delivery_address,
            total_amount_minor: order.total_amount_minor,
            currency: order.currency,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }

    fn validate(order: OrderRequest) -> Result<OrderRequest, Error> {
        validate::non_negative("Total amount", Some(order.total_amount_minor))?;
        validate::date_range(Some(order.order_date), order.delivery_date)?;

        Ok(OrderRequest {
            order_number: validate::required("Order number", &order.order_number)?,
            currency: validate::currency(&order.currency)?,
            delivery_address: validate::optional(order.delivery_address),
            notes: validate::optional(order.notes),
            ..order
        })
    }
}
