//! Employee Model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, ErrorCode};

/// Date format of `nascimento` on the wire and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Employee entity (`funcionarios` row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub nome: String,
    pub email: String,
    /// Job title
    pub cargo: String,
    /// Free text, not enumerated
    pub sexo: String,
    pub nascimento: NaiveDate,
    pub telefone: String,
    pub salario: f64,
    /// Stamped by the storage clock on insert, never editable
    #[serde(rename = "dataCadastro")]
    pub data_cadastro: NaiveDateTime,
}

/// Validated create/update payload (everything except `id` and `dataCadastro`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub sexo: String,
    pub nascimento: NaiveDate,
    pub telefone: String,
    pub salario: f64,
}

/// Raw request body: every field optional and loosely typed
///
/// Use [`EmployeeInput::validate`] to obtain an [`EmployeeDraft`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    pub nome: Option<Value>,
    pub email: Option<Value>,
    pub cargo: Option<Value>,
    pub sexo: Option<Value>,
    pub nascimento: Option<Value>,
    pub telefone: Option<Value>,
    pub salario: Option<Value>,
}

impl EmployeeInput {
    /// Check every field and report all violations at once
    ///
    /// Missing fields produce [`ErrorCode::RequiredField`] (details:
    /// `missing`, plus `invalid` when some are also malformed); malformed
    /// fields alone produce [`ErrorCode::InvalidFormat`] (details: `invalid`).
    pub fn validate(&self) -> Result<EmployeeDraft, AppError> {
        let mut check = FieldCheck::default();

        let nome = check.text("nome", &self.nome);
        let email = check.text("email", &self.email);
        let cargo = check.text("cargo", &self.cargo);
        let sexo = check.text("sexo", &self.sexo);
        let nascimento = check.date("nascimento", &self.nascimento);
        let telefone = check.text("telefone", &self.telefone);
        let salario = check.amount("salario", &self.salario);

        match (nome, email, cargo, sexo, nascimento, telefone, salario) {
            (
                Some(nome),
                Some(email),
                Some(cargo),
                Some(sexo),
                Some(nascimento),
                Some(telefone),
                Some(salario),
            ) if check.is_clean() => Ok(EmployeeDraft {
                nome,
                email,
                cargo,
                sexo,
                nascimento,
                telefone,
                salario,
            }),
            _ => Err(check.into_error()),
        }
    }
}

/// Collects field violations while coercing values
#[derive(Debug, Default)]
struct FieldCheck {
    missing: Vec<&'static str>,
    invalid: Vec<&'static str>,
}

impl FieldCheck {
    fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    fn into_error(self) -> AppError {
        if self.missing.is_empty() {
            return AppError::new(ErrorCode::InvalidFormat).with_detail("invalid", self.invalid);
        }
        let err = AppError::new(ErrorCode::RequiredField).with_detail("missing", self.missing);
        if self.invalid.is_empty() {
            err
        } else {
            err.with_detail("invalid", self.invalid)
        }
    }

    /// Non-empty string; surrounding whitespace is dropped
    fn text(&mut self, field: &'static str, value: &Option<Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => {
                self.missing.push(field);
                None
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.missing.push(field);
                None
            }
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(_) => {
                self.invalid.push(field);
                None
            }
        }
    }

    /// `YYYY-MM-DD`, or an ISO datetime whose date part is used
    fn date(&mut self, field: &'static str, value: &Option<Value>) -> Option<NaiveDate> {
        let raw = self.text(field, value)?;
        let date_part = match raw.split_once('T') {
            Some((date, _)) => date,
            None => raw.as_str(),
        };
        match NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.invalid.push(field);
                None
            }
        }
    }

    /// Number or numeric string; a numeric zero counts as absent
    fn amount(&mut self, field: &'static str, value: &Option<Value>) -> Option<f64> {
        let parsed = match value {
            None | Some(Value::Null) => {
                self.missing.push(field);
                return None;
            }
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v == 0.0 => {
                    self.missing.push(field);
                    return None;
                }
                other => other,
            },
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.missing.push(field);
                return None;
            }
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match parsed {
            Some(v) if v.is_finite() => Some(v),
            _ => {
                self.invalid.push(field);
                None
            }
        }
    }
}
