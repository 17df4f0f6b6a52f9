//! Client flows against an in-process server

use std::sync::Arc;

use funcionarios_client::screens::{Effect, FormScreen, ListScreen, LoginScreen, Route};
use funcionarios_client::{ClientConfig, ClientError, DirectoryApi, HttpClient};
use funcionarios_server::db::DbService;
use funcionarios_server::{AppState, api};
use tokio::net::TcpListener;

/// Serve the router on an ephemeral port and return a client pointed at it
async fn spawn_server() -> anyhow::Result<HttpClient> {
    let db = DbService::in_memory().await?;
    let state = AppState::from_pool(db.pool);
    state.seed_user("admin@empresa.com", "s3cret").await?;

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, api::router(state)).await;
    });

    Ok(ClientConfig::new(format!("http://{addr}")).build_http_client()?)
}

#[tokio::test]
async fn test_full_flow() -> anyhow::Result<()> {
    let api: Arc<dyn DirectoryApi> = Arc::new(spawn_server().await?);

    // Login
    let mut login = LoginScreen::new(api.clone());
    login.email = "admin@empresa.com".into();
    login.password = "s3cret".into();
    assert_eq!(login.submit().await, Effect::navigate(Route::List { refresh: false }));
    assert_eq!(login.user().map(|u| u.email.as_str()), Some("admin@empresa.com"));

    // Empty list
    let mut list = ListScreen::new(api.clone());
    assert!(list.on_focus(&mut false).await.is_none());
    assert!(list.employees().is_empty());

    // Create
    let mut form = FormScreen::new(api.clone());
    form.mount(None);
    form.fields.nome = "Ana Silva".into();
    form.fields.email = "ana@x.com".into();
    form.fields.cargo = "Dev".into();
    form.fields.sexo = "Feminino".into();
    form.fields.nascimento = "1990-01-01".into();
    form.fields.telefone = "119999".into();
    form.fields.salario = "5000".into();
    let effect = form.submit().await;
    let Some(Route::List { mut refresh }) = effect.navigate.clone() else {
        anyhow::bail!("create did not navigate to the list: {effect:?}");
    };
    assert!(refresh);

    list.on_focus(&mut refresh).await;
    assert_eq!(list.employees().len(), 1);
    let ana = list.employees()[0].clone();
    assert_eq!(ana.nome, "Ana Silva");

    // Edit
    let Some(Route::Form { employee }) = list.edit(&ana).navigate else {
        anyhow::bail!("edit did not open the form");
    };
    form.mount(employee.as_ref());
    form.fields.salario = "6500,75".into();
    let effect = form.submit().await;
    assert_eq!(effect.navigate, Some(Route::List { refresh: true }));

    let fetched = api.get_employee(ana.id).await?;
    assert_eq!(fetched.salario, 6500.75);
    assert_eq!(fetched.data_cadastro, ana.data_cadastro);

    // Delete
    list.refresh().await;
    let confirm = list.request_delete(ana.id);
    let effect = list.confirm_delete(&confirm).await;
    assert_eq!(effect.alert.map(|a| a.title), Some("Sucesso".to_string()));
    assert!(list.employees().is_empty());

    let err = api.get_employee(ana.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Funcionário não encontrado");
    Ok(())
}

#[tokio::test]
async fn test_server_errors_surface_verbatim() -> anyhow::Result<()> {
    let client = spawn_server().await?;

    let err = client.login("admin@empresa.com", "errada").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Credenciais inválidas");

    let input = funcionarios_client::EmployeeInput {
        nome: Some("Ana".into()),
        ..Default::default()
    };
    let err = client.create_employee(&input).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert_eq!(err.user_message(), "Todos os campos são obrigatórios");

    let err = client.delete_employee(12345).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    Ok(())
}
