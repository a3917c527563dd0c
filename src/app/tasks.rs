//! Background work: API calls run on the tokio runtime and report back
//! over a channel that the UI drains every frame.

use super::{App, Route};
use crate::error::Result;
use crate::flash::FlashMessage;
use crate::page::{self, Applied, DeleteOutcome, DeleteRequest, LoadOutcome, LoadRequest};
use crate::types::{NewStar, Star};
use eframe::egui;
use tracing::{debug, error, info};

pub enum TaskMessage {
    Loaded {
        generation: u64,
        outcome: LoadOutcome,
    },
    Deleted {
        generation: u64,
        outcome: DeleteOutcome,
    },
    Created {
        universe_id: u64,
        result: Result<Star>,
    },
}

impl App {
    pub(crate) fn spawn_load(&self, ctx: &egui::Context, request: LoadRequest) {
        let api = self.api.clone();
        let tx = self.task_tx.clone();
        let ctx = ctx.clone();
        let generation = self.page_generation;

        debug!(seq = request.seq, page = request.page, "Dispatching load");
        self.runtime.spawn(async move {
            let outcome = page::execute_load(api.as_ref(), request).await;
            if tx.send(TaskMessage::Loaded { generation, outcome }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    pub(crate) fn spawn_delete(&self, ctx: &egui::Context, request: DeleteRequest) {
        let api = self.api.clone();
        let tx = self.task_tx.clone();
        let ctx = ctx.clone();
        let generation = self.page_generation;

        self.runtime.spawn(async move {
            let outcome = page::execute_delete(api.as_ref(), request).await;
            if tx.send(TaskMessage::Deleted { generation, outcome }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    pub(crate) fn spawn_create(&self, ctx: &egui::Context, star: NewStar) {
        let api = self.api.clone();
        let tx = self.task_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let universe_id = star.universe_id;
            let result = api.create_star(&star).await;
            if tx.send(TaskMessage::Created { universe_id, result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    /// Drain finished tasks and fold them into the UI state
    pub(crate) fn poll_tasks(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.task_rx.try_recv() {
            match message {
                TaskMessage::Loaded { generation, outcome } => {
                    if generation != self.page_generation {
                        debug!(generation, "Dropping result for a page that was left");
                        continue;
                    }
                    if let Applied::Reload(request) = self.page.apply(outcome) {
                        self.spawn_load(ctx, request);
                    }
                }
                TaskMessage::Deleted { generation, outcome } => {
                    if generation != self.page_generation {
                        debug!(generation, star_id = outcome.star_id, "Delete finished after leaving its page");
                        continue;
                    }
                    if let Some(request) = self.page.finish_delete(outcome) {
                        self.spawn_load(ctx, request);
                    }
                }
                TaskMessage::Created { universe_id, result } => match result {
                    Ok(star) => {
                        info!(id = star.id, name = %star.name, universe_id, "Star created");
                        self.flash
                            .push(FlashMessage::StarCreated { universe_id, star });
                        self.navigate(ctx, Route::Universe(universe_id));
                    }
                    Err(e) => {
                        error!(error = %e, universe_id, "Failed to create star");
                        if let Some(form) = self.create_form.as_mut() {
                            form.fail(e);
                        }
                    }
                },
            }
        }
    }
}
