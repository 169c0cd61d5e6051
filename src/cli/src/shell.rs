use anyhow::{Result, anyhow, ensure};
use crux_core::Core;
use log::{debug, info};
use std::{collections::VecDeque, io::Write, time::Duration};
use wifi_setup_core::{
    App, DelayOutput, DeviceEvent, Effect, Event, LockIcon, SetupOptions, Tab, TextKey, UiEvent,
    ViewModel, WifiEvent,
};

use crate::{
    config::AutoConnect,
    device_client::DeviceClient,
    language::Language,
    prompt::{Action, Prompt},
    render,
};

/// Rescans before giving up on a network that is not listed
pub const MAX_RESCANS: usize = 3;

/// How a run of the page ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The device accepted the credentials
    Connected,
    /// The device could not connect with the credentials
    NotConnected,
    /// The user left the page
    Quit,
}

/// Terminal shell driving the core
pub struct Shell<P, L, W> {
    core: Core<App>,
    client: DeviceClient,
    prompt: P,
    language: L,
    out: W,
    last_toast: Option<u32>,
}

impl<P, L, W> Shell<P, L, W>
where
    P: Prompt,
    L: Language,
    W: Write,
{
    pub fn new(client: DeviceClient, prompt: P, language: L, out: W) -> Self {
        Self {
            core: Core::new(),
            client,
            prompt,
            language,
            out,
            last_toast: None,
        }
    }

    pub fn view(&self) -> ViewModel {
        self.core.view()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Mount the page, run it interactively or with `auto_connect`, unmount
    pub async fn run(
        &mut self,
        options: SetupOptions,
        auto_connect: Option<&AutoConnect>,
    ) -> Result<Outcome> {
        self.dispatch(Event::Initialize(options)).await?;

        ensure!(
            !self.view().loading,
            "failed to load device configuration"
        );

        let outcome = match auto_connect {
            Some(auto_connect) => self.connect_to(auto_connect).await,
            None => self.interact().await,
        };

        self.dispatch(Event::Unmount).await?;

        outcome
    }

    /// Send an event and resolve every effect it causes
    pub async fn dispatch(&mut self, event: Event) -> Result<()> {
        let effects = self.core.process_event(event);
        self.run_effects(effects).await
    }

    async fn run_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        let mut queue = VecDeque::from(effects);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Render(_) => self.show_toast()?,
                Effect::Http(mut request) => {
                    let result = self.client.execute(&request.operation).await;
                    let effects = self
                        .core
                        .resolve(&mut request, result)
                        .map_err(|e| anyhow!("failed to resolve HTTP request: {e}"))?;
                    queue.extend(effects);
                }
                Effect::Delay(mut request) => {
                    debug!("waiting {} ms", request.operation.millis);
                    tokio::time::sleep(Duration::from_millis(request.operation.millis)).await;
                    let effects = self
                        .core
                        .resolve(&mut request, DelayOutput::Elapsed)
                        .map_err(|e| anyhow!("failed to resolve delay: {e}"))?;
                    queue.extend(effects);
                }
            }
        }

        Ok(())
    }

    /// Print the current toast once
    fn show_toast(&mut self) -> Result<()> {
        if let Some(toast) = self.view().toast {
            if self.last_toast != Some(toast.id) {
                self.last_toast = Some(toast.id);
                writeln!(self.out, "{}", render::toast(&toast, &self.language))?;
            }
        }
        Ok(())
    }

    fn show_page(&mut self, view: &ViewModel) -> Result<()> {
        writeln!(self.out, "{}", render::page(view, &self.language))?;
        Ok(())
    }

    async fn submit(&mut self) -> Result<Outcome> {
        let before = self.view().toast.map(|toast| toast.id);

        self.dispatch(Event::Wifi(WifiEvent::Submit)).await?;

        let connected = matches!(
            self.view().toast,
            Some(toast) if Some(toast.id) != before && toast.key == TextKey::WifiConnectedSuccessfully
        );

        Ok(if connected {
            Outcome::Connected
        } else {
            Outcome::NotConnected
        })
    }

    async fn connect_to(&mut self, auto_connect: &AutoConnect) -> Result<Outcome> {
        let mut rescans = 0;

        let network = loop {
            let view = self.view();
            if let Some(network) = view.networks.iter().find(|n| n.ssid == auto_connect.ssid) {
                break network.clone();
            }

            ensure!(
                rescans < MAX_RESCANS,
                "network {} not found after {MAX_RESCANS} rescans",
                auto_connect.ssid
            );
            rescans += 1;
            info!(
                "{} not listed yet, rescanning ({rescans}/{MAX_RESCANS})",
                auto_connect.ssid
            );
            self.dispatch(Event::Wifi(WifiEvent::Scan)).await?;
        };

        self.dispatch(Event::Wifi(WifiEvent::Choose(network.access_point())))
            .await?;
        self.dispatch(Event::Wifi(WifiEvent::SetPassword {
            password: auto_connect.password.clone(),
        }))
        .await?;

        self.submit().await
    }

    async fn interact(&mut self) -> Result<Outcome> {
        loop {
            let view = self.view();
            self.show_page(&view)?;

            match self.prompt.next_action(&view)? {
                Action::Choose(index) => {
                    let Some(network) = view.networks.get(index) else {
                        continue;
                    };
                    self.dispatch(Event::Wifi(WifiEvent::Choose(network.access_point())))
                        .await?;

                    if network.lock == LockIcon::Locked {
                        writeln!(
                            self.out,
                            "{}",
                            self.language.lang(TextKey::SelectWifiPasswordPlaceholder)
                        )?;
                        let password = self.prompt.password(&network.ssid)?;
                        self.dispatch(Event::Wifi(WifiEvent::SetPassword { password }))
                            .await?;
                    }
                }
                Action::Rescan => self.dispatch(Event::Wifi(WifiEvent::Scan)).await?,
                Action::Connect => {
                    if self.submit().await? == Outcome::Connected {
                        return Ok(Outcome::Connected);
                    }
                }
                Action::EditSettings => {
                    self.dispatch(Event::Ui(UiEvent::SelectTab(Tab::Manage)))
                        .await?;
                    let view = self.view();
                    self.show_page(&view)?;

                    let config = self.prompt.settings(&view.config)?;
                    self.dispatch(Event::Device(DeviceEvent::SaveConfig(config)))
                        .await?;
                    self.dispatch(Event::Ui(UiEvent::SelectTab(Tab::Wifi)))
                        .await?;
                }
                Action::Quit => return Ok(Outcome::Quit),
            }
        }
    }
}
