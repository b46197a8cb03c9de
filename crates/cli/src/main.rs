//! Nagios-style health checks for ActiveMQ over the Jolokia HTTP endpoint.
//!
//! Prints exactly one report line and exits with the code the invoking
//! monitoring supervisor expects: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use amqcheck_check::{
    CheckGroup, CheckRunner, ClassificationRule, Report, ThresholdRule, Verdict,
};
use amqcheck_jolokia::JolokiaClient;
use amqcheck_probes::{
    DEFAULT_DLQ, DlqProbe, ExistsProbe, HealthProbe, QueueSizeProbe, SubscriberPendingProbe,
    SubscriberProbe,
};
use clap::{Parser, Subcommand};
use tracing::debug;
use url::Url;

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid queue-name pattern
    #[error("invalid queue pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Endpoint could not be assembled
    #[error(transparent)]
    Jolokia(#[from] amqcheck_jolokia::Error),
}

#[derive(Clone, Debug, Parser)]
#[command(name = "check-activemq", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::Args)]
struct ConnectionArgs {
    /// ActiveMQ server hostname
    #[arg(long, default_value = "localhost", env = "AMQCHECK_HOST")]
    host: String,

    /// ActiveMQ web console port
    #[arg(long, default_value_t = 8161, env = "AMQCHECK_PORT")]
    port: u16,

    /// Jolokia URL tail part
    #[arg(long, default_value = "api/jolokia/read", env = "AMQCHECK_URL_TAIL")]
    url_tail: String,

    /// Override the complete Jolokia endpoint URL; --user, --pwd, --host
    /// and --port are ignored when this is given
    #[arg(short = 'j', long, env = "AMQCHECK_JOLOKIA_URL")]
    jolokia_url: Option<Url>,

    /// Username for the ActiveMQ admin account
    #[arg(short, long, default_value = "admin", env = "AMQCHECK_USER")]
    user: String,

    /// Password for the ActiveMQ admin account
    #[arg(short, long, default_value = "admin", env = "AMQCHECK_PWD")]
    pwd: String,
}

impl ConnectionArgs {
    fn client(&self) -> Result<JolokiaClient, Error> {
        match &self.jolokia_url {
            Some(url) => Ok(JolokiaClient::new(url.clone())),
            None => Ok(JolokiaClient::from_parts(
                &self.user,
                &self.pwd,
                &self.host,
                self.port,
                &self.url_tail,
            )?),
        }
    }
}

/// Warning and critical bounds, both "alert if greater than".
#[derive(Clone, Copy, Debug, clap::Args)]
struct ThresholdArgs {
    /// Warning if the observed value is greater
    #[arg(short, long, default_value_t = 10)]
    warn: i64,

    /// Critical if the observed value is greater
    #[arg(short, long, default_value_t = 100)]
    crit: i64,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Check the size of one queue, of queues matching a wildcard, or of
    /// every queue on the broker
    Queuesize {
        #[command(flatten)]
        thresholds: ThresholdArgs,

        /// Queue to check; `*` and `?` wildcards select several, no value
        /// selects all
        queue: Option<String>,
    },

    /// Check that the broker reports its current status as Good
    Health,

    /// Check that a client is an active subscriber of a topic
    Subscriber {
        /// Client ID of the subscriber to look for
        #[arg(long)]
        client_id: String,

        /// Topic the subscription is expected on
        #[arg(long)]
        topic: String,
    },

    /// Check that a queue or topic with the given name exists
    Exists {
        /// Name of the queue or topic to look for
        #[arg(long)]
        name: String,
    },

    /// Check that a durable subscription's pending-message backlog stays
    /// within bounds and belongs to the expected client
    SubscriberPending {
        /// Name of the subscription to check
        #[arg(long)]
        subscription: String,

        /// Client ID involved in the subscription
        #[arg(long)]
        client_id: String,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// Check that the dead letter queue exists and is not too deep
    Dlqcheck {
        /// Name of the DLQ to check
        #[arg(long, default_value = DEFAULT_DLQ)]
        dlq: String,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

async fn run(args: Args) -> Result<Report, Error> {
    let jolokia = args.connection.client()?;
    debug!(command = ?args.command, "running check");

    match args.command {
        Command::Queuesize { thresholds, queue } => {
            let runner = CheckRunner::new(
                CheckGroup::Size,
                ClassificationRule::Threshold(ThresholdRule::new(thresholds.warn, thresholds.crit)),
            );
            let report = match queue {
                Some(pattern) => {
                    let probe = QueueSizeProbe::matching(jolokia, &pattern)?;
                    runner.run(&probe).await
                }
                None => runner.run(&QueueSizeProbe::all(jolokia)).await,
            };
            Ok(report)
        }
        Command::Health => {
            let runner = CheckRunner::new(CheckGroup::Health, ClassificationRule::HealthFlag);
            Ok(runner.run(&HealthProbe::new(jolokia)).await)
        }
        Command::Subscriber { client_id, topic } => {
            let runner = CheckRunner::new(
                CheckGroup::Subscriber,
                ClassificationRule::SubscriberState {
                    topic: topic.clone(),
                    client_id: client_id.clone(),
                },
            );
            let probe = SubscriberProbe::new(jolokia, topic, client_id);
            Ok(runner.run(&probe).await)
        }
        Command::Exists { name } => {
            let runner = CheckRunner::new(
                CheckGroup::Exists,
                ClassificationRule::Existence { name: name.clone() },
            );
            Ok(runner.run(&ExistsProbe::new(jolokia, name)).await)
        }
        Command::SubscriberPending {
            subscription,
            client_id,
            thresholds,
        } => {
            let runner = CheckRunner::new(
                CheckGroup::SubscriberPending,
                ClassificationRule::Threshold(ThresholdRule::critical_on_failure(
                    thresholds.warn,
                    thresholds.crit,
                )),
            );
            let probe = SubscriberPendingProbe::new(jolokia, subscription, client_id);
            Ok(runner.run(&probe).await)
        }
        Command::Dlqcheck { dlq, thresholds } => {
            let runner = CheckRunner::new(
                CheckGroup::Dlq,
                ClassificationRule::Threshold(ThresholdRule::critical_on_failure(
                    thresholds.warn,
                    thresholds.crit,
                )),
            );
            Ok(runner.run(&DlqProbe::new(jolokia, dlq)).await)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(args).await {
        Ok(report) => {
            println!("{}", report.line);
            std::process::exit(report.exit_code());
        }
        Err(err) => {
            // setup failures still honor the plugin protocol
            println!("UNKNOWN: {err}");
            std::process::exit(Verdict::Unknown.exit_code());
        }
    }
}
