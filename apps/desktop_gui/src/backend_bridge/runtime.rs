//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, HttpRecommender, RecommenderApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let api: Arc<dyn RecommenderApi> = match HttpRecommender::from_settings(&settings) {
            Ok(api) => Arc::new(api),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                tracing::error!("failed to build recommender client: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));

            let mut in_flight: Option<tokio::task::JoinHandle<()>> = None;
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Recommend { ticket, request } => {
                        if let Some(previous) = in_flight.take() {
                            if !previous.is_finished() {
                                tracing::info!(ticket = ticket.0, "superseding in-flight request");
                            }
                            previous.abort();
                        }

                        let api = Arc::clone(&api);
                        let ui_tx = ui_tx.clone();
                        in_flight = Some(tokio::spawn(async move {
                            let outcome = api.recommend(&request).await;
                            if ui_tx
                                .send(UiEvent::RecommendationsFinished { ticket, outcome })
                                .is_err()
                            {
                                tracing::debug!("ui closed before reply was delivered");
                            }
                        }));
                    }
                }
            }
            tracing::debug!("command queue closed; backend worker exiting");
        });
    });
}
