//! Routes, alerts and confirmation prompts

use shared::models::Employee;

/// Navigation targets
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// `refresh` asks the list to reload on its next focus
    List { refresh: bool },
    /// `None` opens the form in create mode
    Form { employee: Option<Employee> },
}

/// A modal message with a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Erro".to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Sucesso".to_string(),
            message: message.into(),
        }
    }
}

/// Confirmation prompt guarding a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
    /// Employee to delete once confirmed
    pub employee_id: i64,
}

impl Confirm {
    pub fn delete(employee_id: i64) -> Self {
        Self {
            title: "Confirmar Exclusão".to_string(),
            message: "Tem certeza que deseja excluir este funcionário?".to_string(),
            cancel_label: "Cancelar".to_string(),
            confirm_label: "Excluir".to_string(),
            employee_id,
        }
    }
}

/// What the UI should do after an action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    pub alert: Option<Alert>,
    pub navigate: Option<Route>,
}

impl Effect {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn alert(alert: Alert) -> Self {
        Self {
            alert: Some(alert),
            navigate: None,
        }
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            alert: None,
            navigate: Some(route),
        }
    }

    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }

    pub fn is_none(&self) -> bool {
        self.alert.is_none() && self.navigate.is_none()
    }
}
