//! Employee list screen

use std::sync::Arc;

use shared::models::Employee;

use super::{Alert, Busy, Confirm, Effect, Route};
use crate::DirectoryApi;

const LOAD_FAILED: &str = "Não foi possível carregar os funcionários";
const DELETE_FAILED: &str = "Não foi possível excluir o funcionário";
const DELETED: &str = "Funcionário excluído com sucesso!";

pub struct ListScreen {
    api: Arc<dyn DirectoryApi>,
    employees: Vec<Employee>,
    loading: bool,
    loaded_once: bool,
}

impl ListScreen {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            employees: Vec::new(),
            loading: false,
            loaded_once: false,
        }
    }

    /// Employees as last loaded, in server order (by name)
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Screen gained focus
    ///
    /// Loads on the first focus and whenever `refresh` is set, then clears
    /// the flag so the next focus does not reload again.
    pub async fn on_focus(&mut self, refresh: &mut bool) -> Effect {
        if self.loaded_once && !*refresh {
            return Effect::none();
        }
        *refresh = false;
        self.load().await
    }

    /// Pull-to-refresh
    pub async fn refresh(&mut self) -> Effect {
        self.load().await
    }

    /// A failed load keeps the previous rows
    async fn load(&mut self) -> Effect {
        let result = {
            let _busy = Busy::new(&mut self.loading);
            self.api.list_employees().await
        };
        self.loaded_once = true;

        match result {
            Ok(employees) => {
                tracing::debug!(count = employees.len(), "Employees loaded");
                self.employees = employees;
                Effect::none()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load employees");
                Effect::alert(Alert::error(LOAD_FAILED))
            }
        }
    }

    pub fn edit(&self, employee: &Employee) -> Effect {
        Effect::navigate(Route::Form {
            employee: Some(employee.clone()),
        })
    }

    pub fn new_employee(&self) -> Effect {
        Effect::navigate(Route::Form { employee: None })
    }

    /// Ask before deleting; nothing is sent until [`Self::confirm_delete`]
    pub fn request_delete(&self, id: i64) -> Confirm {
        Confirm::delete(id)
    }

    /// Delete the confirmed employee and reload the list
    pub async fn confirm_delete(&mut self, confirm: &Confirm) -> Effect {
        match self.api.delete_employee(confirm.employee_id).await {
            Ok(_) => {
                tracing::debug!(id = confirm.employee_id, "Employee deleted");
                let reloaded = self.load().await;
                if reloaded.is_none() {
                    Effect::alert(Alert::success(DELETED))
                } else {
                    reloaded
                }
            }
            Err(e) => {
                tracing::debug!(id = confirm.employee_id, error = %e, "Delete failed");
                Effect::alert(Alert::error(DELETE_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fake::{FakeApi, employee};

    fn names(screen: &ListScreen) -> Vec<&str> {
        screen.employees().iter().map(|e| e.nome.as_str()).collect()
    }

    fn api() -> Arc<FakeApi> {
        Arc::new(FakeApi::with_employees(vec![
            employee(1, "Carla", "carla@x.com"),
            employee(2, "Ana", "ana@x.com"),
        ]))
    }

    #[tokio::test]
    async fn test_first_focus_loads() {
        let api = api();
        let mut screen = ListScreen::new(api.clone());
        let mut refresh = false;

        assert!(screen.on_focus(&mut refresh).await.is_none());
        assert_eq!(names(&screen), ["Ana", "Carla"]);
        assert_eq!(api.calls(), 1);

        // Refocus without the flag does not hit the server
        screen.on_focus(&mut refresh).await;
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_flag_reloads_once() {
        let api = api();
        let mut screen = ListScreen::new(api.clone());
        screen.on_focus(&mut false).await;

        let mut refresh = true;
        screen.on_focus(&mut refresh).await;
        assert!(!refresh);
        assert_eq!(api.calls(), 2);

        screen.on_focus(&mut refresh).await;
        assert_eq!(api.calls(), 2);

        screen.refresh().await;
        assert_eq!(api.calls(), 3);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_rows() {
        let api = api();
        let mut screen = ListScreen::new(api.clone());
        screen.refresh().await;

        api.set_offline(true);
        let effect = screen.refresh().await;
        assert_eq!(effect, Effect::alert(Alert::error(LOAD_FAILED)));
        assert_eq!(screen.employees().len(), 2);
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn test_navigation() {
        let screen = ListScreen::new(api());
        let ana = employee(2, "Ana", "ana@x.com");

        assert_eq!(
            screen.edit(&ana).navigate,
            Some(Route::Form {
                employee: Some(ana.clone())
            })
        );
        assert_eq!(
            screen.new_employee().navigate,
            Some(Route::Form { employee: None })
        );
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let api = api();
        let mut screen = ListScreen::new(api.clone());
        screen.refresh().await;

        let confirm = screen.request_delete(1);
        assert_eq!(confirm.employee_id, 1);
        assert_eq!(confirm.title, "Confirmar Exclusão");
        assert_eq!(api.employees().len(), 2);

        let effect = screen.confirm_delete(&confirm).await;
        assert_eq!(effect, Effect::alert(Alert::success(DELETED)));
        assert_eq!(names(&screen), ["Ana"]);
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let api = api();
        let mut screen = ListScreen::new(api);
        screen.refresh().await;

        let effect = screen.confirm_delete(&Confirm::delete(99)).await;
        assert_eq!(effect, Effect::alert(Alert::error(DELETE_FAILED)));
        assert_eq!(screen.employees().len(), 2);
    }
}
