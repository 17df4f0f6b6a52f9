//! Create/edit employee form

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde_json::Value;
use shared::models::{DATE_FORMAT, Employee, EmployeeInput};

use super::{Alert, Busy, Effect, Route};
use crate::DirectoryApi;

const REQUIRED: &str = "Por favor, preencha todos os campos obrigatórios.";
const INVALID_SALARY: &str = "Salário deve ser um número.";

/// Form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub sexo: String,
    /// `YYYY-MM-DD`
    pub nascimento: String,
    pub telefone: String,
    pub salario: String,
}

impl From<&Employee> for EmployeeFields {
    fn from(e: &Employee) -> Self {
        Self {
            nome: e.nome.clone(),
            email: e.email.clone(),
            cargo: e.cargo.clone(),
            sexo: e.sexo.clone(),
            nascimento: e.nascimento.format(DATE_FORMAT).to_string(),
            telefone: e.telefone.clone(),
            salario: e.salario.to_string(),
        }
    }
}

impl EmployeeFields {
    fn all_filled(&self) -> bool {
        [
            &self.nome,
            &self.email,
            &self.cargo,
            &self.sexo,
            &self.nascimento,
            &self.telefone,
            &self.salario,
        ]
        .iter()
        .all(|f| !f.trim().is_empty())
    }

    /// Request body; `None` when the salary is not a finite number
    fn to_input(&self) -> Option<EmployeeInput> {
        let salario = parse_salary(&self.salario)?;
        let text = |s: &str| Some(Value::from(s.trim()));
        Some(EmployeeInput {
            nome: text(&self.nome),
            email: text(&self.email),
            cargo: text(&self.cargo),
            sexo: text(&self.sexo),
            nascimento: text(&self.nascimento),
            telefone: text(&self.telefone),
            salario: Some(Value::from(salario)),
        })
    }
}

/// Accepts `,` as the decimal separator
fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub struct FormScreen {
    api: Arc<dyn DirectoryApi>,
    pub fields: EmployeeFields,
    /// Display only; the stored value is assigned by the server
    data_cadastro: String,
    editing_id: Option<i64>,
    loading: bool,
}

impl FormScreen {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            fields: EmployeeFields::default(),
            data_cadastro: String::new(),
            editing_id: None,
            loading: false,
        }
    }

    /// Open the form for `employee` (edit) or blank (create)
    pub fn mount(&mut self, employee: Option<&Employee>) {
        self.mount_on(employee, Local::now().date_naive());
    }

    /// [`Self::mount`] with an explicit "today" for the create-mode stamp
    pub fn mount_on(&mut self, employee: Option<&Employee>, today: NaiveDate) {
        match employee {
            Some(e) => {
                self.fields = EmployeeFields::from(e);
                self.data_cadastro = e.data_cadastro.date().format(DATE_FORMAT).to_string();
                self.editing_id = Some(e.id);
            }
            None => {
                self.fields = EmployeeFields::default();
                self.data_cadastro = today.format(DATE_FORMAT).to_string();
                self.editing_id = None;
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data_cadastro(&self) -> &str {
        &self.data_cadastro
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Editar Funcionário"
        } else {
            "Novo Funcionário"
        }
    }

    /// Back to the list without saving or reloading
    pub fn cancel(&self) -> Effect {
        Effect::navigate(Route::List { refresh: false })
    }

    /// Save and go back to a refreshed list
    pub async fn submit(&mut self) -> Effect {
        if !self.fields.all_filled() {
            return Effect::alert(Alert::error(REQUIRED));
        }
        let Some(input) = self.fields.to_input() else {
            return Effect::alert(Alert::error(INVALID_SALARY));
        };

        let result = {
            let _busy = Busy::new(&mut self.loading);
            match self.editing_id {
                Some(id) => self
                    .api
                    .update_employee(id, &input)
                    .await
                    .map(|e| (e, "Funcionário atualizado com sucesso!")),
                None => self
                    .api
                    .create_employee(&input)
                    .await
                    .map(|e| (e, "Funcionário cadastrado com sucesso!")),
            }
        };

        match result {
            Ok((saved, message)) => {
                tracing::debug!(id = saved.id, "Employee saved");
                self.mount(None);
                Effect::navigate(Route::List { refresh: true }).with_alert(Alert::success(message))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Save failed");
                Effect::alert(Alert::error(e.user_message()))
            }
        }
    }
}
