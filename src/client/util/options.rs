//! `(value, label)` pairs for select inputs and facet filters.

use std::fmt::Display;

use crate::model::{
    document::DocumentCategoryDto, farm::FarmDto, project::ProjectDto, supplier::SupplierDto,
};

pub type Options = Vec<(String, String)>;

pub fn farms(farms: &[FarmDto]) -> Options {
    farms
        .iter()
        .map(|farm| (farm.id.to_string(), farm.name.clone()))
        .collect()
}

pub fn suppliers(suppliers: &[SupplierDto]) -> Options {
    suppliers
        .iter()
        .map(|supplier| (supplier.id.to_string(), supplier.name.clone()))
        .collect()
}

pub fn projects(projects: &[ProjectDto]) -> Options {
    projects
        .iter()
        .map(|project| (project.id.to_string(), project.name.clone()))
        .collect()
}

pub fn categories(categories: &[DocumentCategoryDto]) -> Options {
    categories
        .iter()
        .map(|category| (category.id.to_string(), category.name.clone()))
        .collect()
}

/// Options for a stored enum, labelled with its value in words (`needs_service` as "needs service")
pub fn variants<T: Display>(all: &[T]) -> Options {
    all.iter()
        .map(|variant| {
            let value = variant.to_string();
            let label = value.replace('_', " ");
            (value, label)
        })
        .collect()
}

/// Distinct values of a free-text column, sorted, for facets like equipment category
pub fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Options {
    let mut values: Vec<&str> = values.collect();
    values.sort_unstable();
    values.dedup();
    values
        .into_iter()
        .map(|value| (value.to_string(), value.to_string()))
        .collect()
}
