//! Todo Service Library
//!
//! An in-memory User/Todo store exposed through two interchangeable
//! contract shapes, plus thin services enforcing that todos belong to
//! existing users.

pub mod config;
pub mod container;
pub mod demo;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, Context};

use crate::config::TodoServiceConfig;
use crate::container::{ContractShape, Services};
use crate::demo::DemoReport;
use crate::repository::InMemoryStore;

/// Run the demonstration once per shape, each on a fresh store.
pub async fn run_demo(
    config: &TodoServiceConfig,
    shapes: &[ContractShape],
    ctx: Context,
) -> AppResult<Vec<DemoReport>> {
    let mut reports = Vec::with_capacity(shapes.len());

    for &shape in shapes {
        let store = Arc::new(InMemoryStore::with_config(&config.store));
        let services = Services::from_store(store, shape);

        info!(
            request_id = %ctx.request_id(),
            contract = %shape,
            create_policy = %config.store.create_policy,
            "Running demo"
        );
        reports.push(demo::run(ctx.clone(), &services).await?);
    }

    Ok(reports)
}
