// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::domain::ApplicationRecord;
use crate::error::AppResult;
use crate::events::{ApplicationDeleted, EventBus};
use crate::integrations::portal::PortalGateway;
use crate::services::route_guard::Route;

/// State behind the dashboard screen: the authenticated user's
/// applications, replaced wholesale on every load. List mutation happens
/// only after the server confirms; there is no optimistic update.
pub struct DashboardService {
    portal: Arc<dyn PortalGateway>,
    event_bus: Arc<EventBus>,
    applications: Vec<ApplicationRecord>,
    /// Bumped by `reset`; responses from a previous epoch are dropped.
    epoch: u64,
}

impl DashboardService {
    pub fn new(portal: Arc<dyn PortalGateway>, event_bus: Arc<EventBus>) -> Self {
        Self {
            portal,
            event_bus,
            applications: Vec::new(),
            epoch: 0,
        }
    }

    pub fn applications(&self) -> &[ApplicationRecord] {
        &self.applications
    }

    /// Invalidate in-flight responses and clear the list, e.g. when the
    /// user navigates away from the dashboard.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.applications.clear();
    }

    /// Fetch the list and replace local state entirely. Any failure
    /// resets the list to empty and propagates for the UI to report.
    pub async fn load(&mut self) -> AppResult<()> {
        let epoch = self.epoch;
        let result = self.portal.list_applications().await;
        if epoch != self.epoch {
            return Ok(());
        }

        match result {
            Ok(records) => {
                self.applications = records;
                Ok(())
            }
            Err(err) => {
                log::warn!("could not load applications: {}", err);
                self.applications.clear();
                Err(err)
            }
        }
    }

    /// Delete on the server, then drop the matching record locally. A
    /// failed delete leaves the list untouched and propagates.
    pub async fn remove(&mut self, id: i64) -> AppResult<()> {
        let epoch = self.epoch;
        self.portal.delete_application(id).await?;
        if epoch == self.epoch {
            self.applications.retain(|record| record.id != Some(id));
        }
        self.event_bus.emit(ApplicationDeleted::new(id));
        Ok(())
    }

    /// Navigation intents for the router collaborator.
    pub fn create_intent(&self) -> Route {
        Route::CreateApplication
    }

    pub fn edit_intent(&self, id: i64) -> Route {
        Route::EditApplication(id)
    }
}
