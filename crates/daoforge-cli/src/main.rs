mod app;
mod types;
mod ui;

use app::messages::Message;
use app::state::{ModalHost, TelemetryBridge};
use daoforge_analytics::tracker::AnalyticsTracker;
use daoforge_config::settings::AppConfig;
use daoforge_logging::logger::{initialize_logger, LogLevel, LoggerHandle};
use daoforge_messaging::gateway::{GatewayEnv, PushGateway};
use daoforge_messaging::provision::{ChannelProvisioner, PushProvisioner};
use daoforge_types::draft::{DraftDao, NetworkKind};
use daoforge_wallet::adapter::WalletAdapter;
use daoforge_wallet::crypto::keypair::KeyPair;
use daoforge_wizard::checklist::is_publish_allowed;
use daoforge_wizard::event::PublishOutcome;
use daoforge_wizard::form::FormState;
use daoforge_wizard::orchestrator::PublishOrchestrator;
use daoforge_wizard::traits::ModalController;

use iced::widget::{Button, Container, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    executor,
    theme::{self, Theme},
    Application, Command, Element, Length, Settings,
};
use starknet::core::types::Felt;
use starknet::core::utils::cairo_short_string_to_felt;
use std::sync::Arc;
use std::time::Duration as TimeDuration;
use tokio::runtime::Handle;
use types::enums::View;
use ui::component::CreateComponent;
use ui::styles::button::OutlinedButtonStyle;
use ui::views::activity::ActivityView;
use ui::views::dialog::DialogView;
use ui::views::golive::GoLiveView;
use ui::views::landing::LandingView;
use ui::views::modal::ModalView;

pub struct AppFlags {
    pub config: AppConfig,
    pub logger: LoggerHandle,
    pub tracker: AnalyticsTracker,
    pub provisioner: Arc<dyn ChannelProvisioner>,
    pub runtime: Handle,
}

pub struct DaoforgeApp {
    current_view: View,
    form: FormState,
    orchestrator: PublishOrchestrator,
    wallet: WalletAdapter,
    modals: ModalHost,
    telemetry: TelemetryBridge,
    logger: LoggerHandle,
    seed_phrase: String,
    expected_chain_id: Felt,
}

impl Application for DaoforgeApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let AppFlags {
            config,
            logger,
            tracker,
            provisioner,
            runtime,
        } = flags;

        let expected_chain_id =
            cairo_short_string_to_felt(&config.rpc.chain_id).unwrap_or(Felt::ZERO);
        let draft = DraftDao::new(
            network_for_chain(&config.rpc.chain_id),
            config.rpc.chain_id.clone(),
        );

        let app = Self {
            current_view: View::Landing,
            form: FormState::new(draft),
            orchestrator: PublishOrchestrator::new(runtime, provisioner, Arc::clone(&logger)),
            wallet: WalletAdapter::new(expected_chain_id, config.rpc.url.clone()),
            modals: ModalHost::default(),
            telemetry: TelemetryBridge::new(tracker),
            logger,
            seed_phrase: String::new(),
            expected_chain_id,
        };

        let initial_command = app.log_command(LogLevel::Info, "wizard session started".to_string());
        (app, initial_command)
    }

    fn title(&self) -> String {
        String::from("daoforge")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CreateWallet => {
                let keypair = KeyPair::generate();
                match self.wallet.connect(&keypair, self.expected_chain_id) {
                    Ok(()) => {
                        self.current_view = View::GoLive;
                        self.log_command(LogLevel::Info, "wallet created and connected".to_string())
                    }
                    Err(e) => self
                        .log_command(LogLevel::Error, format!("wallet connection failed: {}", e)),
                }
            }
            Message::RestoreWallet => match KeyPair::from_mnemonic(self.seed_phrase.trim()) {
                Ok(keypair) => match self.wallet.connect(&keypair, self.expected_chain_id) {
                    Ok(()) => {
                        self.current_view = View::GoLive;
                        self.log_command(LogLevel::Info, "wallet restored and connected".to_string())
                    }
                    Err(e) => self
                        .log_command(LogLevel::Error, format!("wallet connection failed: {}", e)),
                },
                Err(e) => {
                    self.log_command(LogLevel::Error, format!("could not restore wallet: {}", e))
                }
            },
            Message::SeedPhraseChanged(value) => {
                self.seed_phrase = value;
                Command::none()
            }
            Message::NavigateTo(view) => {
                self.current_view = view;
                Command::none()
            }
            Message::DaoNameChanged(value) => {
                self.form.draft.name = value;
                Command::none()
            }
            Message::DaoSummaryChanged(value) => {
                self.form.draft.summary = value;
                Command::none()
            }
            Message::SectionAcknowledged(section, acknowledged) => {
                self.form.checklist.acknowledge(section, acknowledged);
                if is_publish_allowed(&self.form.checklist) {
                    self.orchestrator.clear_validation_errors();
                }
                Command::none()
            }
            Message::PublishClicked => {
                let snapshot = self.wallet.snapshot();
                let outcome = self.orchestrator.publish(
                    &self.form.draft,
                    &snapshot,
                    &mut self.modals,
                    &self.telemetry,
                );

                let line = match outcome {
                    PublishOutcome::DialogOpened => {
                        "publish preconditions passed, confirmation dialog opened"
                    }
                    PublishOutcome::WalletModalOpened => "publish blocked: wallet not connected",
                    PublishOutcome::NetworkModalOpened => {
                        "publish blocked: wallet on the wrong network"
                    }
                    PublishOutcome::InFlight => "publish ignored: confirmation dialog already open",
                };
                self.log_command(LogLevel::Info, line.to_string())
            }
            Message::RevealValidationErrors => {
                self.orchestrator
                    .reveal_validation_errors(&self.form.checklist);
                Command::none()
            }
            Message::ModalDismissed(modal) => {
                self.modals.close(modal);
                Command::none()
            }
            Message::DialogClosed => {
                self.orchestrator.dialog_dismissed();
                Command::none()
            }
            Message::DeployConfirmed => {
                // The transaction flow owns everything past this point.
                self.orchestrator.dialog_dismissed();
                self.log_command(
                    LogLevel::Info,
                    format!(
                        "deployment of '{}' handed to the transaction flow",
                        self.form.draft.name
                    ),
                )
            }
            Message::Noop => Command::none(),
        }
    }

    fn view(&self) -> Element<Message> {
        if let Some(modal) = self.modals.active() {
            return self.modal_view(modal);
        }

        if self.orchestrator.is_dialog_open() {
            return self.dialog_view();
        }

        match self.current_view {
            View::Landing => self.landing_view(),
            View::GoLive => self.golive_view(),
            View::Activity => self.activity_view(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl DaoforgeApp {
    fn log_command(&self, level: LogLevel, message: String) -> Command<Message> {
        let logger = Arc::clone(&self.logger);
        Command::perform(
            async move {
                if let Some(logger) = logger.lock().await.as_ref() {
                    logger.log(level, message).await;
                }
            },
            |_| Message::Noop,
        )
    }
}

impl CreateComponent for DaoforgeApp {
    fn create_button<'a>(&self, label: &'a str, message: Message) -> Button<'a, Message> {
        Button::new(
            Text::new(label)
                .horizontal_alignment(Horizontal::Center)
                .vertical_alignment(Vertical::Center),
        )
        .padding(12)
        .style(theme::Button::Custom(Box::new(OutlinedButtonStyle)))
        .on_press(message)
    }

    fn create_centered_container<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message> {
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

impl LandingView for DaoforgeApp {
    fn seed_phrase(&self) -> &str {
        &self.seed_phrase
    }
}

impl GoLiveView for DaoforgeApp {
    fn form_state(&self) -> &FormState {
        &self.form
    }

    fn checklist_errors_visible(&self) -> bool {
        self.orchestrator.checklist_errors_visible()
    }
}

impl DialogView for DaoforgeApp {
    fn draft(&self) -> &DraftDao {
        &self.form.draft
    }
}

impl ActivityView for DaoforgeApp {
    fn logger(&self) -> &LoggerHandle {
        &self.logger
    }
}

impl ModalView for DaoforgeApp {}

fn network_for_chain(chain_id: &str) -> NetworkKind {
    match chain_id {
        "SN_MAIN" => NetworkKind::Mainnet,
        "SN_SEPOLIA" => NetworkKind::Sepolia,
        _ => NetworkKind::Devnet,
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> iced::Result {
    let config = AppConfig::load_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .format_timestamp_millis()
    .filter(Some("iced_wgpu"), log::LevelFilter::Error)
    .filter(Some("iced_winit"), log::LevelFilter::Error)
    .filter(Some("wgpu"), log::LevelFilter::Error)
    .init();

    let logger = initialize_logger("daoforge.log", TimeDuration::from_secs(5))
        .await
        .expect("log file is writable");

    let tracker = AnalyticsTracker::new(if config.analytics.enabled {
        config.analytics.endpoint.clone()
    } else {
        None
    });

    let gateway = PushGateway::new(
        config.messaging.gateway_url.clone(),
        GatewayEnv::from_tier(&config.messaging.env),
    )
    .expect("messaging gateway client");
    let provisioner: Arc<dyn ChannelProvisioner> = Arc::new(PushProvisioner::new(gateway));

    let flags = AppFlags {
        config,
        logger,
        tracker,
        provisioner,
        runtime: Handle::current(),
    };

    let mut settings = Settings::with_flags(flags);
    settings.window.size = (1100, 820);
    settings.window.resizable = false;

    DaoforgeApp::run(settings)
}
