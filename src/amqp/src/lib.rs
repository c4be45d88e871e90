use lapin::{
    options::{BasicPublishOptions, ConfirmSelectOptions, ExchangeDeclareOptions},
    types::FieldTable,
    BasicProperties, ExchangeKind,
};

pub use lapin::{Connection, ConnectionProperties};

/// Publishes notification messages to a fanout exchange named by the
/// topic id, with publisher confirms.
pub struct AmqpNotifier {
    channel: lapin::Channel,
}

impl AmqpNotifier {
    pub async fn new(connection: &lapin::Connection) -> anyhow::Result<Self> {
        let channel = connection.create_channel().await?;
        channel
            .confirm_select(ConfirmSelectOptions { nowait: false })
            .await?;
        Ok(Self { channel })
    }

    /// Declares the topic's exchange. Idempotent; call once at startup.
    pub async fn declare_topic(&self, topic: &str) -> anyhow::Result<()> {
        self.channel
            .exchange_declare(
                topic,
                ExchangeKind::Fanout,
                ExchangeDeclareOptions::default(),
                FieldTable::default(),
            )
            .await?;
        Ok(())
    }

    pub async fn publish(&self, topic: &str, message: &str) -> anyhow::Result<()> {
        let confirmation = self
            .channel
            .basic_publish(
                topic,
                "",
                BasicPublishOptions::default(),
                message.as_bytes(),
                BasicProperties::default(),
            )
            .await?;

        let confirmation = confirmation.await?;
        anyhow::ensure!(confirmation.is_ack());

        Ok(())
    }
}

impl dispatcher::Notifier for AmqpNotifier {
    async fn publish(&self, topic: &str, message: &str) -> anyhow::Result<()> {
        AmqpNotifier::publish(self, topic, message).await
    }
}
