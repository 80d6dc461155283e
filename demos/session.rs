//! Login, start the backend and read every view, printing what the UI would show.
//!
//! ```bash
//! TRADEDESK_API_URL=http://localhost:8000 \
//! TRADEDESK_TOTP=123456 TRADEDESK_API_KEY=... TRADEDESK_CLIENT_ID=... TRADEDESK_PASSWORD=... \
//! cargo run --example session --features native
//! ```

use futures::StreamExt;
use tracing_subscriber::EnvFilter;
use tradedesk::prelude::*;

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url =
        std::env::var("TRADEDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = TradeDeskClient::builder().base_url(&base_url).build()?;

    let (sink, mut events) = ChannelSink::new();
    let printer = tokio::spawn(async move {
        while let Some(event) = events.next().await {
            match event {
                UiEvent::Notify(n) => println!("[{:?}] {}: {}", n.severity, n.title, n.description),
                UiEvent::Navigate(route) => println!("-> {}", route.path()),
                UiEvent::ActivationChanged(state) => println!("button: {}", state.label()),
                UiEvent::BucketUpdated { view, .. } => println!("{} updated", view.title()),
            }
        }
    });

    // `run` owns the only sender; once it returns the printer drains and exits.
    let result = run(client, sink).await;
    let _ = printer.await;
    result
}

async fn run(client: TradeDeskClient, sink: ChannelSink) -> Result<(), SdkError> {
    let mut login = AuthController::new(client, sink);
    login.update_field(CredentialField::Totp, env_or_empty("TRADEDESK_TOTP"));
    login.update_field(CredentialField::ApiKey, env_or_empty("TRADEDESK_API_KEY"));
    login.update_field(CredentialField::ClientId, env_or_empty("TRADEDESK_CLIENT_ID"));
    login.update_field(CredentialField::Password, env_or_empty("TRADEDESK_PASSWORD"));
    if let Some(field) = login.missing_fields().first() {
        return Err(AuthError::MissingField(*field).into());
    }

    let session = match login.submit().await {
        Submission::Authenticated(auth) => auth.into_session(),
        Submission::Editing { error, .. } => return Err(error),
    };

    // Failures are already reported as notifications.
    let _ = session.activate().await;
    for view in View::ALL {
        let _ = session.select_tab(view).await;
    }

    for bucket in session.snapshot().await.buckets.iter() {
        println!("── {} ──\n{}", bucket.view.title(), bucket.pretty());
    }
    Ok(())
}
