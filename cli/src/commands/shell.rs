//! Interactive training session.
//!
//! Reads one command per line from stdin while checks and explanations run
//! in the background, so `reset` stays available during a check.

mod input;

use std::sync::Arc;

use anyhow::Context;
use colored::*;
use console::Term;
use netplan_trainer_common::config::Config;
use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::success;
use netplan_trainer_common::task::{TaskConfig, TaskField};
use netplan_trainer_common::verdict::Assessment;
use netplan_trainer_core::reasoning::ReasoningOracle;
use netplan_trainer_core::services::explainer::{SHORTCUT_TOPICS, UNAVAILABLE_EXPLANATION};
use netplan_trainer_core::services::{ExplainerService, ValidationService};
use netplan_trainer_core::simulation::{CheckTicket, Resolution, Simulation};
use netplan_trainer_core::view::{CLIENT_NAME, EditorView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

use self::input::{END_OF_EDIT, ShellCommand};
use crate::commands::check::read_document;
use crate::terminal::spinner::{self, SpinnerHandle};
use crate::terminal::{colors, panels, print};

struct PendingCheck {
    ticket: CheckTicket,
    handle: JoinHandle<Assessment>,
    /// Cleared when a reset makes the check stale.
    spinner: Option<SpinnerHandle>,
}

struct PendingExplain {
    handle: JoinHandle<String>,
    _spinner: SpinnerHandle,
}

enum Flow {
    Continue,
    Quit,
}

struct Session {
    sim: Simulation,
    validation: ValidationService,
    explainer: ExplainerService,
    model: String,
    quiet: u8,
    check: Option<PendingCheck>,
    explain: Option<PendingExplain>,
    /// Lines collected by `edit` until the terminating `.`.
    editing: Option<Vec<String>>,
}

pub async fn shell(task: TaskConfig, cfg: &Config) -> anyhow::Result<()> {
    let oracle = Arc::new(
        ReasoningOracle::from_config(&cfg.service)
            .context("could not set up the reasoning client")?,
    );
    if cfg.service.api_key.is_none() {
        warn!("No API key configured, every check will report a connection error");
    }

    let model = oracle.model().to_string();
    let mut session = Session::new(
        Simulation::new(task),
        ValidationService::new(oracle.clone()),
        ExplainerService::new(oracle),
        model,
        cfg.quiet,
    );
    session.run().await
}

async fn join_check(pending: &mut Option<PendingCheck>) -> Result<Assessment, JoinError> {
    match pending {
        Some(pending) => (&mut pending.handle).await,
        None => std::future::pending().await,
    }
}

async fn join_explain(pending: &mut Option<PendingExplain>) -> Result<String, JoinError> {
    match pending {
        Some(pending) => (&mut pending.handle).await,
        None => std::future::pending().await,
    }
}

impl Session {
    fn new(
        sim: Simulation,
        validation: ValidationService,
        explainer: ExplainerService,
        model: String,
        quiet: u8,
    ) -> Self {
        Self {
            sim,
            validation,
            explainer,
            model,
            quiet,
            check: None,
            explain: None,
            editing: None,
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        panels::print_all(&self.sim, self.quiet);
        info!("Type 'help' for the list of commands");
        self.prompt();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;

        loop {
            if !stdin_open && self.check.is_none() && self.explain.is_none() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if stdin_open => {
                    match line.context("could not read from stdin")? {
                        Some(line) => {
                            if let Flow::Quit = self.handle_line(&line).await {
                                break;
                            }
                        }
                        None => {
                            self.close_input();
                            stdin_open = false;
                        }
                    }
                }
                joined = join_check(&mut self.check) => {
                    self.finish_check(joined);
                }
                joined = join_explain(&mut self.explain) => self.finish_explain(joined),
            }

            if stdin_open {
                self.prompt();
            }
        }

        print::end_of_program(self.quiet);
        Ok(())
    }

    fn close_input(&mut self) {
        if let Some(lines) = self.editing.take() {
            warn!("Input closed before '{END_OF_EDIT}', discarded {} edited lines", lines.len());
        }
        debug!("stdin closed, waiting for background work");
    }

    fn prompt(&self) {
        if !console::user_attended() {
            return;
        }
        let prompt = match self.editing {
            Some(_) => format!("{} ", "...".color(colors::MUTED)),
            None => format!("{} ", "netplan>".color(colors::PRIMARY).bold()),
        };
        let _ = Term::stdout().write_str(&prompt);
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        if let Some(buffer) = self.editing.as_mut() {
            if line.trim_end() != END_OF_EDIT {
                buffer.push(line.to_string());
                return Flow::Continue;
            }
            let text = self.editing.take().unwrap_or_default().join("\n");
            self.sim.edit_document(text);
            info!("Document updated ({} lines)", self.sim.document().line_count());
            return Flow::Continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(command) => self.execute(command).await,
            Err(e) => {
                warn!("{e}");
                Flow::Continue
            }
        }
    }

    async fn execute(&mut self, command: ShellCommand) -> Flow {
        let locked = matches!(
            command,
            ShellCommand::Set(..) | ShellCommand::Edit | ShellCommand::Load(_) | ShellCommand::Apply
        );
        if locked && self.sim.is_busy() {
            warn!("A check is running, wait for the verdict or type 'reset'");
            return Flow::Continue;
        }

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Show => panels::print_all(&self.sim, self.quiet),
            ShellCommand::Task => {
                panels::print_task(self.sim.task(), self.sim.is_busy(), self.quiet)
            }
            ShellCommand::Status => self.print_status(),
            ShellCommand::Help => print_help(),
            ShellCommand::Set(field, value) => self.set_field(field, value),
            ShellCommand::Edit => {
                info!("Enter the new configuration, finish with a single '{END_OF_EDIT}' line");
                self.editing = Some(Vec::new());
            }
            ShellCommand::Load(path) => match read_document(&path).await {
                Ok(document) => self.load(document),
                Err(e) => error!("{e:#}"),
            },
            ShellCommand::Apply => self.start_check(),
            ShellCommand::Reset => self.reset(),
            ShellCommand::Explain(topic) => self.start_explain(topic),
            ShellCommand::Close => self.sim.dismiss_explainer(),
            ShellCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn set_field(&mut self, field: TaskField, value: String) {
        self.sim.set_task_field(field, value);
        info!("{} set to {}", field.label(), self.sim.task().get(field));
    }

    fn load(&mut self, document: ConfigurationDocument) {
        self.sim.edit_document(document);
        panels::print_editor(&EditorView::new(self.sim.document(), false), self.quiet);
    }

    fn print_status(&self) {
        let width = "Explainer".len();
        print::aligned_line("Status", width, self.sim.status().as_str().to_uppercase());
        print::aligned_line("Check", width, format!("#{}", self.sim.generation()));
        let explainer = match self.sim.explainer() {
            panel if panel.loading => format!("loading '{}'", panel.topic),
            panel if panel.open => format!("showing '{}'", panel.topic),
            _ => "closed".to_string(),
        };
        print::aligned_line("Explainer", width, explainer);
    }

    fn start_check(&mut self) {
        let ticket = self.sim.begin_check();
        panels::print_task(self.sim.task(), true, self.quiet);

        let spinner = spinner::start("Applying configuration...", spinner::CHECK_TIPS);
        spinner.send_to_queue(format!("Waiting for the verdict from {}...", self.model));

        let service = self.validation.clone();
        let document = ticket.document.clone();
        let task = ticket.task.clone();
        let handle = tokio::spawn(async move { service.assess(&document, &task).await });

        if self.check.is_some() {
            debug!("detaching a stale check");
        }
        self.check = Some(PendingCheck {
            ticket,
            handle,
            spinner: Some(spinner),
        });
    }

    fn finish_check(&mut self, joined: Result<Assessment, JoinError>) -> Option<Resolution> {
        let mut pending = self.check.take()?;
        pending.spinner.take();

        let assessment = joined.unwrap_or_else(|e| Assessment::Unavailable {
            reason: format!("check task failed: {e}"),
        });

        let resolution = self.sim.resolve_check(&pending.ticket, assessment);
        match resolution {
            Resolution::Applied(status) => {
                panels::print_outcome(&self.sim, self.quiet);
                if status.is_connected() {
                    success!("{CLIENT_NAME} reached the server");
                }
            }
            Resolution::Stale => info!("Discarded the verdict of an abandoned check"),
        }
        Some(resolution)
    }

    fn reset(&mut self) {
        if let Some(pending) = self.check.as_mut() {
            pending.spinner.take();
        }
        self.sim.reset();
        info!("Configuration restored to the starting template");
        if self.quiet == 0 {
            panels::print_all(&self.sim, self.quiet);
        }
    }

    fn start_explain(&mut self, topic: String) {
        if self.explain.is_some() {
            warn!(
                "Still explaining '{}', wait for it before asking again",
                self.sim.explainer().topic
            );
            return;
        }
        self.sim.begin_explain(topic.clone());
        let spinner = spinner::start(&format!("Looking up '{topic}'..."), spinner::EXPLAIN_TIPS);

        let service = self.explainer.clone();
        let handle = tokio::spawn(async move { service.explain(&topic).await });
        self.explain = Some(PendingExplain {
            handle,
            _spinner: spinner,
        });
    }

    fn finish_explain(&mut self, joined: Result<String, JoinError>) {
        self.explain = None;
        let text = joined.unwrap_or_else(|e| {
            debug!("explain task failed: {e}");
            UNAVAILABLE_EXPLANATION.to_string()
        });
        self.sim.finish_explain(text);
        panels::print_explainer(self.sim.explainer(), self.quiet);
    }
}

fn print_help() {
    print::header("commands", 0);
    print::tree_head("doc", "the configuration");
    print::as_tree_one_level(vec![
        "show            print every panel".normal(),
        "edit            type a new document, end with '.'".normal(),
        "load <file>     read the document from a file".normal(),
        "apply           send the document for validation".normal(),
        "reset           restore the template, abandon a running check".normal(),
    ]);
    print::tree_head("task", "the exercise");
    print::as_tree_one_level(vec![
        "task                  print the task panel".normal(),
        format!(
            "set <field> <value>   fields: {}",
            TaskField::ALL.map(|f| f.key()).join(", ")
        )
        .normal(),
    ]);
    print::tree_head("help", "concepts");
    print::as_tree_one_level(vec![
        format!("{}?  short explanation", SHORTCUT_TOPICS.join("? ")).normal(),
        "explain <topic>   any other Netplan concept".normal(),
        "close             hide the explanation".normal(),
    ]);
    print::tree_head("misc", "session");
    print::as_tree_one_level(vec![
        "status          state of the simulation".normal(),
        "quit            leave the trainer".normal(),
    ]);
}
