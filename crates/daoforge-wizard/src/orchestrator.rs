use crate::checklist::is_publish_allowed;
use crate::event::{ModalId, PublishOutcome};
use crate::traits::{ModalController, TelemetrySink};
use daoforge_logging::logger::LoggerHandle;
use daoforge_messaging::provision::{channel_request_for, ChannelProvisioner};
use daoforge_types::checklist::ReviewChecklist;
use daoforge_types::draft::DraftDao;
use daoforge_wallet::adapter::WalletSnapshot;
use daoforge_wallet::signer::SignerHandle;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Telemetry event raised when a connected user hits publish.
pub const PUBLISH_CLICKED_EVENT: &str = "daoCreation_publishYourDAO_clicked";

/// Drives the final "Go Live" action: precondition checks against a fresh
/// wallet snapshot, interrupt modals when they fail, and on success the
/// deployment confirmation dialog plus a detached best-effort task that
/// provisions the DAO's notification channel.
///
/// `dialog_open` and `checklist_errors_visible` are the only state owned
/// here. Both are single-writer: only these handlers mutate them, and the
/// rendering layer reads them between events.
pub struct PublishOrchestrator {
    runtime: Handle,
    provisioner: Arc<dyn ChannelProvisioner>,
    logger: LoggerHandle,
    dialog_open: bool,
    checklist_errors_visible: bool,
}

impl PublishOrchestrator {
    pub fn new(
        runtime: Handle,
        provisioner: Arc<dyn ChannelProvisioner>,
        logger: LoggerHandle,
    ) -> Self {
        Self {
            runtime,
            provisioner,
            logger,
            dialog_open: false,
            checklist_errors_visible: false,
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn checklist_errors_visible(&self) -> bool {
        self.checklist_errors_visible
    }

    /// Handles a publish action. Single-flight per publish cycle: while the
    /// dialog is open, further requests are ignored entirely. Otherwise the
    /// wallet snapshot decides between the interrupt modals and opening the
    /// dialog; in the success branch the dialog opens before the
    /// provisioning task is issued, so dialog visibility never waits on
    /// network I/O.
    pub fn publish<M, T>(
        &mut self,
        draft: &DraftDao,
        wallet: &WalletSnapshot,
        modals: &mut M,
        telemetry: &T,
    ) -> PublishOutcome
    where
        M: ModalController,
        T: TelemetrySink,
    {
        if self.dialog_open {
            return PublishOutcome::InFlight;
        }

        // Unconnected clicks are not tracked.
        if wallet.connected {
            telemetry.track_event(PUBLISH_CLICKED_EVENT, publish_click_props(draft, wallet));
        }

        let signer = match (wallet.connected, &wallet.signer) {
            (true, Some(signer)) => Arc::clone(signer),
            _ => {
                modals.open(ModalId::Wallet);
                return PublishOutcome::WalletModalOpened;
            }
        };

        if wallet.wrong_network {
            modals.open(ModalId::Network);
            return PublishOutcome::NetworkModalOpened;
        }

        self.dialog_open = true;
        self.spawn_provision(signer, draft);
        PublishOutcome::DialogOpened
    }

    /// Called when the confirmation dialog is dismissed, by confirmation or
    /// cancel. Ends the publish cycle; the next publish action is accepted
    /// again.
    pub fn dialog_dismissed(&mut self) {
        self.dialog_open = false;
    }

    /// Companion to the disabled publish button: flags incomplete checklist
    /// sections for display. Returns the flag so callers can re-render.
    pub fn reveal_validation_errors(&mut self, checklist: &ReviewChecklist) -> bool {
        if !is_publish_allowed(checklist) {
            self.checklist_errors_visible = true;
        }
        self.checklist_errors_visible
    }

    pub fn clear_validation_errors(&mut self) {
        self.checklist_errors_visible = false;
    }

    /// Launches channel provisioning for the current draft snapshot. The
    /// join handle is dropped: dismissing the dialog must not cancel an
    /// in-flight create, and a completed result is only ever logged.
    fn spawn_provision(&self, signer: Arc<SignerHandle>, draft: &DraftDao) {
        let request = channel_request_for(draft);
        let provisioner = Arc::clone(&self.provisioner);
        let logger = Arc::clone(&self.logger);

        self.runtime.spawn(async move {
            match provisioner.provision(signer, request).await {
                Ok(handle) => {
                    if let Some(logger) = logger.lock().await.as_ref() {
                        logger
                            .info(format!("notification channel {} created", handle.chat_id))
                            .await;
                    }
                }
                Err(e) => {
                    if let Some(logger) = logger.lock().await.as_ref() {
                        logger
                            .warning(format!("notification channel provisioning failed: {}", e))
                            .await;
                    }
                }
            }
        });
    }
}

fn publish_click_props(draft: &DraftDao, wallet: &WalletSnapshot) -> HashMap<String, String> {
    let mut props = HashMap::new();
    props.insert(
        "network".to_string(),
        draft.blockchain.network.to_string(),
    );
    props.insert(
        "wallet_provider".to_string(),
        wallet.provider_identity.clone(),
    );
    props.insert(
        "governance_type".to_string(),
        draft.governance.membership.to_string(),
    );
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use daoforge_logging::logger::initialize_logger;
    use daoforge_messaging::error::ProvisionError;
    use daoforge_types::channel::{ChannelHandle, ChannelRequest};
    use daoforge_types::draft::NetworkKind;
    use daoforge_wallet::crypto::keypair::KeyPair;
    use starknet::core::utils::cairo_short_string_to_felt;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::mpsc;
    use tokio::sync::Mutex;
    use tokio::time::{sleep, timeout, Duration};

    #[derive(Default)]
    struct RecordingModals {
        opened: Vec<ModalId>,
    }

    impl ModalController for RecordingModals {
        fn open(&mut self, modal: ModalId) {
            self.opened.push(modal);
        }

        fn close(&mut self, _modal: ModalId) {}
    }

    #[derive(Default)]
    struct RecordingTelemetry {
        events: StdMutex<Vec<(String, HashMap<String, String>)>>,
    }

    impl TelemetrySink for RecordingTelemetry {
        fn track_event(&self, name: &str, props: HashMap<String, String>) {
            self.events
                .lock()
                .unwrap()
                .push((name.to_string(), props));
        }
    }

    /// Provisioner double that reports each invocation over a channel and
    /// then succeeds or fails as configured.
    struct ProvisionProbe {
        tx: mpsc::UnboundedSender<ChannelRequest>,
        fail: bool,
    }

    #[async_trait]
    impl ChannelProvisioner for ProvisionProbe {
        async fn provision(
            &self,
            _signer: Arc<SignerHandle>,
            request: ChannelRequest,
        ) -> Result<ChannelHandle, ProvisionError> {
            self.tx.send(request).expect("test receiver alive");
            if self.fail {
                Err(ProvisionError::Session)
            } else {
                Ok(ChannelHandle::new("chat_1".to_string()))
            }
        }
    }

    fn acme_draft() -> DraftDao {
        let mut draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        draft.name = "Acme DAO".to_string();
        draft.summary = "A test DAO".to_string();
        draft
    }

    fn disconnected_snapshot() -> WalletSnapshot {
        WalletSnapshot {
            connected: false,
            wrong_network: false,
            signer: None,
            provider_identity: "http://127.0.0.1:5050".to_string(),
        }
    }

    fn connected_snapshot(wrong_network: bool) -> WalletSnapshot {
        let keypair = KeyPair::generate();
        let chain_id = cairo_short_string_to_felt("SN_SEPOLIA").unwrap();
        WalletSnapshot {
            connected: true,
            wrong_network,
            signer: Some(Arc::new(SignerHandle::from_keypair(&keypair, chain_id))),
            provider_identity: "http://127.0.0.1:5050".to_string(),
        }
    }

    fn orchestrator_with_probe(
        fail: bool,
        logger: LoggerHandle,
    ) -> (PublishOrchestrator, mpsc::UnboundedReceiver<ChannelRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let orchestrator = PublishOrchestrator::new(
            Handle::current(),
            Arc::new(ProvisionProbe { tx, fail }),
            logger,
        );
        (orchestrator, rx)
    }

    fn no_logger() -> LoggerHandle {
        Arc::new(Mutex::new(None))
    }

    #[tokio::test]
    async fn test_disconnected_wallet_opens_wallet_modal_only() {
        let (mut orchestrator, mut rx) = orchestrator_with_probe(false, no_logger());
        let mut modals = RecordingModals::default();
        let telemetry = RecordingTelemetry::default();

        let outcome = orchestrator.publish(
            &acme_draft(),
            &disconnected_snapshot(),
            &mut modals,
            &telemetry,
        );

        assert_eq!(outcome, PublishOutcome::WalletModalOpened);
        assert_eq!(modals.opened, vec![ModalId::Wallet]);
        assert!(!orchestrator.is_dialog_open());
        // No provisioning and no telemetry for an unconnected click.
        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
        assert!(telemetry.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_network_opens_network_modal_only() {
        let (mut orchestrator, mut rx) = orchestrator_with_probe(false, no_logger());
        let mut modals = RecordingModals::default();
        let telemetry = RecordingTelemetry::default();

        let outcome = orchestrator.publish(
            &acme_draft(),
            &connected_snapshot(true),
            &mut modals,
            &telemetry,
        );

        assert_eq!(outcome, PublishOutcome::NetworkModalOpened);
        assert_eq!(modals.opened, vec![ModalId::Network]);
        assert!(!orchestrator.is_dialog_open());
        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
        // The click itself is tracked: the wallet was connected.
        assert_eq!(telemetry.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_publish_opens_dialog_before_provisioning_resolves() {
        let (mut orchestrator, mut rx) = orchestrator_with_probe(false, no_logger());
        let mut modals = RecordingModals::default();
        let telemetry = RecordingTelemetry::default();

        let outcome = orchestrator.publish(
            &acme_draft(),
            &connected_snapshot(false),
            &mut modals,
            &telemetry,
        );

        // Dialog visibility is observable synchronously, before the
        // detached task has produced anything.
        assert_eq!(outcome, PublishOutcome::DialogOpened);
        assert!(orchestrator.is_dialog_open());
        assert!(modals.opened.is_empty());

        let request = timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("provisioner invoked")
            .unwrap();
        assert_eq!(request.title, "Acme DAO");
        assert_eq!(request.description, "A test DAO");
        assert_eq!(request.image, "");
    }

    #[tokio::test]
    async fn test_end_to_end_happy_path_tracks_once() {
        let (mut orchestrator, mut rx) = orchestrator_with_probe(false, no_logger());
        let mut modals = RecordingModals::default();
        let telemetry = RecordingTelemetry::default();

        orchestrator.publish(
            &acme_draft(),
            &connected_snapshot(false),
            &mut modals,
            &telemetry,
        );

        let events = telemetry.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        let (name, props) = &events[0];
        assert_eq!(name, PUBLISH_CLICKED_EVENT);
        assert_eq!(props.get("network").unwrap(), "sepolia");
        assert_eq!(props.get("governance_type").unwrap(), "token-voting");
        assert_eq!(
            props.get("wallet_provider").unwrap(),
            "http://127.0.0.1:5050"
        );
        drop(events);

        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_ok());
    }

    #[tokio::test]
    async fn test_provision_failure_is_logged_and_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daoforge.log");
        let logger = initialize_logger(path.to_str().unwrap(), Duration::from_millis(20))
            .await
            .unwrap();

        let (mut orchestrator, mut rx) = orchestrator_with_probe(true, Arc::clone(&logger));
        let mut modals = RecordingModals::default();
        let telemetry = RecordingTelemetry::default();

        orchestrator.publish(
            &acme_draft(),
            &connected_snapshot(false),
            &mut modals,
            &telemetry,
        );

        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("provisioner invoked")
            .unwrap();

        let mut failures = 0;
        for _ in 0..100 {
            let guard = logger.lock().await;
            if let Some(logger) = guard.as_ref() {
                failures = logger
                    .get_logs()
                    .await
                    .iter()
                    .filter(|entry| entry.message.contains("provisioning failed"))
                    .count();
            }
            drop(guard);
            if failures > 0 {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(failures, 1);
        // The failure never closes the dialog.
        assert!(orchestrator.is_dialog_open());
    }

    #[tokio::test]
    async fn test_publish_is_single_flight_until_dismissed() {
        let (mut orchestrator, mut rx) = orchestrator_with_probe(false, no_logger());
        let mut modals = RecordingModals::default();
        let telemetry = RecordingTelemetry::default();
        let snapshot = connected_snapshot(false);
        let draft = acme_draft();

        let first = orchestrator.publish(&draft, &snapshot, &mut modals, &telemetry);
        let second = orchestrator.publish(&draft, &snapshot, &mut modals, &telemetry);

        assert_eq!(first, PublishOutcome::DialogOpened);
        assert_eq!(second, PublishOutcome::InFlight);
        assert_eq!(telemetry.events.lock().unwrap().len(), 1);

        // Exactly one provisioning task for the whole cycle.
        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_ok());
        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());

        // Dismissal ends the cycle; the next publish is accepted again.
        orchestrator.dialog_dismissed();
        assert!(!orchestrator.is_dialog_open());
        let third = orchestrator.publish(&draft, &snapshot, &mut modals, &telemetry);
        assert_eq!(third, PublishOutcome::DialogOpened);
        assert!(timeout(Duration::from_secs(1), rx.recv()).await.is_ok());
    }

    #[tokio::test]
    async fn test_reveal_validation_errors_flags_incomplete_checklists() {
        let (mut orchestrator, _rx) = orchestrator_with_probe(false, no_logger());
        let draft = acme_draft();
        let mut checklist = ReviewChecklist::for_draft(&draft);

        assert!(orchestrator.reveal_validation_errors(&checklist));
        assert!(orchestrator.checklist_errors_visible());

        orchestrator.clear_validation_errors();
        for section in checklist.sections().collect::<Vec<_>>() {
            checklist.acknowledge(section, true);
        }
        assert!(!orchestrator.reveal_validation_errors(&checklist));
        assert!(!orchestrator.checklist_errors_visible());
    }
}
