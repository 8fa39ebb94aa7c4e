//! Admin console state over an [`EmployeesClient`].
//!
//! The console fetches the roster once. Searches filter that fetched set
//! locally, and every mutation is applied to the local view only with the
//! record the server confirmed.

use tracing::debug;

use crate::console::client::{ClientError, EmployeesClient};
use crate::domain::{Employee, EmployeeDetails, EmployeeId, EmployeeRoster};

/// Result of [`AdminConsole::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The displayed roster now holds only the matches.
    Matched(usize),
    /// Nothing matched; the full snapshot is displayed.
    NotFound,
}

pub struct AdminConsole {
    client: EmployeesClient,
    snapshot: EmployeeRoster,
    displayed: EmployeeRoster,
}

impl AdminConsole {
    /// Fetch the roster and display all of it.
    ///
    /// # Errors
    ///
    /// Propagates the client failure when the initial list cannot be loaded.
    pub async fn load(client: EmployeesClient) -> Result<Self, ClientError> {
        let snapshot: EmployeeRoster = client.list().await?.into_iter().collect();
        debug!(employees = snapshot.len(), "roster loaded");
        Ok(Self {
            client,
            displayed: snapshot.clone(),
            snapshot,
        })
    }

    pub fn displayed(&self) -> &EmployeeRoster {
        &self.displayed
    }

    pub fn snapshot(&self) -> &EmployeeRoster {
        &self.snapshot
    }

    /// Filter the snapshot by exact email. The server is not queried.
    pub fn search(&mut self, email: &str) -> SearchOutcome {
        let matches: EmployeeRoster = self
            .snapshot
            .find_by_email(email)
            .into_iter()
            .cloned()
            .collect();
        if matches.is_empty() {
            self.displayed = self.snapshot.clone();
            SearchOutcome::NotFound
        } else {
            let count = matches.len();
            self.displayed = matches;
            SearchOutcome::Matched(count)
        }
    }

    /// Show the whole snapshot again.
    pub fn reset(&mut self) {
        self.displayed = self.snapshot.clone();
    }

    pub async fn create(&mut self, details: &EmployeeDetails) -> Result<Employee, ClientError> {
        let created = self.client.create(details).await?;
        self.confirm(created.clone());
        Ok(created)
    }

    pub async fn update(
        &mut self,
        id: EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Employee, ClientError> {
        let updated = self.client.update(id, details).await?;
        self.confirm(updated.clone());
        Ok(updated)
    }

    /// Delete `id` on the server, then drop it locally.
    pub async fn delete(&mut self, id: EmployeeId) -> Result<String, ClientError> {
        let message = self.client.delete(id).await?;
        self.snapshot.remove(id);
        self.displayed.remove(id);
        Ok(message)
    }

    fn confirm(&mut self, employee: Employee) {
        let outcome = self.snapshot.merge(employee.clone());
        self.displayed.merge(employee);
        debug!(?outcome, "server record merged");
    }
}
