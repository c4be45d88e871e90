use anyhow::Context;
use dispatcher::{ChangeEvent, Dispatcher, DispatcherConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DispatcherConfig::from_env()?;
    let amqp_addr =
        std::env::var("AMQP_ADDR").unwrap_or_else(|_| "amqp://127.0.0.1:5672".into());
    let orchestrator_url =
        std::env::var("ORCHESTRATOR_URL").context("ORCHESTRATOR_URL is not set")?;

    tracing::info!(
        notification_topic = %config.notification_topic,
        workflow_id = %config.workflow_id,
        orchestrator_url = %orchestrator_url,
        "dispatcher starting"
    );

    let connection =
        amqp::Connection::connect(&amqp_addr, amqp::ConnectionProperties::default()).await?;
    let notifier = amqp::AmqpNotifier::new(&connection).await?;
    notifier.declare_topic(&config.notification_topic).await?;

    let workflow_client = workflows::WorkflowsClient::new(orchestrator_url)?;

    let path = std::env::args()
        .nth(1)
        .context("usage: application <batch.json>")?;
    let batch: Vec<ChangeEvent> = serde_json::from_slice(
        &std::fs::read(&path).with_context(|| format!("failed to read batch file {path}"))?,
    )
    .context("failed to parse batch file")?;

    let dispatcher = Dispatcher::new(config, notifier, workflow_client);
    dispatcher.process(&batch).await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
