//! In-memory directory for screen tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppError;
use shared::models::{Employee, EmployeeInput, UserProfile};

use crate::{ClientError, ClientResult, DirectoryApi};

#[derive(Default)]
struct State {
    employees: Vec<Employee>,
    next_id: i64,
    account: Option<(String, String)>,
    offline: bool,
    stalled: bool,
    calls: usize,
}

/// Applies the server's validation and uniqueness rules to a `Vec`
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

fn api_error(status: u16, err: AppError) -> ClientError {
    ClientError::Api {
        status,
        message: Some(err.message),
    }
}

pub fn employee(id: i64, nome: &str, email: &str) -> Employee {
    Employee {
        id,
        nome: nome.to_string(),
        email: email.to_string(),
        cargo: "Dev".to_string(),
        sexo: "Feminino".to_string(),
        nascimento: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        telefone: "119999".to_string(),
        salario: 5000.0,
        data_cadastro: NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
    }
}

impl FakeApi {
    pub fn with_account(email: &str, password: &str) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().account = Some((email.to_string(), password.to_string()));
        api
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock().unwrap();
            state.next_id = employees.iter().map(|e| e.id).max().unwrap_or(0);
            state.employees = employees;
        }
        api
    }

    pub fn offline() -> Self {
        let api = Self::default();
        api.set_offline(true);
        api
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Calls never complete while set
    pub fn set_stalled(&self, stalled: bool) {
        self.state.lock().unwrap().stalled = stalled;
    }

    async fn wait_unless_stalled(&self) {
        let stalled = self.state.lock().unwrap().stalled;
        if stalled {
            std::future::pending::<()>().await;
        }
    }

    /// Number of calls that reached the fake
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state.lock().unwrap().employees.clone()
    }

    fn enter(&self) -> ClientResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.offline {
            return Err(ClientError::InvalidResponse("connection refused".into()));
        }
        Ok(state)
    }
}

#[async_trait]
impl DirectoryApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> ClientResult<UserProfile> {
        self.wait_unless_stalled().await;
        let state = self.enter()?;
        match &state.account {
            Some((e, p)) if e == email && p == password => Ok(UserProfile {
                id: 1,
                nome: "admin".into(),
                email: email.into(),
                criado_em: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            }),
            _ => Err(api_error(401, AppError::invalid_credentials())),
        }
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.wait_unless_stalled().await;
        let state = self.enter()?;
        let mut employees = state.employees.clone();
        employees.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(employees)
    }

    async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        let state = self.enter()?;
        state
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| api_error(404, AppError::employee_not_found()))
    }

    async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        self.wait_unless_stalled().await;
        let mut state = self.enter()?;
        let draft = input.validate().map_err(|e| api_error(400, e))?;
        if state.employees.iter().any(|e| e.email == draft.email) {
            return Err(api_error(400, AppError::email_taken()));
        }

        state.next_id += 1;
        let mut created = employee(state.next_id, &draft.nome, &draft.email);
        created.cargo = draft.cargo;
        created.sexo = draft.sexo;
        created.nascimento = draft.nascimento;
        created.telefone = draft.telefone;
        created.salario = draft.salario;
        state.employees.push(created.clone());
        Ok(created)
    }

    async fn update_employee(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
        self.wait_unless_stalled().await;
        let mut state = self.enter()?;
        let draft = input.validate().map_err(|e| api_error(400, e))?;
        if !state.employees.iter().any(|e| e.id == id) {
            return Err(api_error(404, AppError::employee_not_found()));
        }
        if state.employees.iter().any(|e| e.email == draft.email && e.id != id) {
            return Err(api_error(400, AppError::email_taken_by_other()));
        }

        let target = state
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| api_error(404, AppError::employee_not_found()))?;
        target.nome = draft.nome;
        target.email = draft.email;
        target.cargo = draft.cargo;
        target.sexo = draft.sexo;
        target.nascimento = draft.nascimento;
        target.telefone = draft.telefone;
        target.salario = draft.salario;
        Ok(target.clone())
    }

    async fn delete_employee(&self, id: i64) -> ClientResult<String> {
        let mut state = self.enter()?;
        let before = state.employees.len();
        state.employees.retain(|e| e.id != id);
        if state.employees.len() == before {
            return Err(api_error(404, AppError::employee_not_found()));
        }
        Ok("Funcionário excluído com sucesso".to_string())
    }
}
