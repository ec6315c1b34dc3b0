use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    api::SignupClient,
    components::{Component, Login, SignUp, StatusBar},
    config::Config,
    mode::Mode,
    tui,
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub components: Vec<Box<dyn Component>>,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub mode: Mode,
    signup_client: SignupClient,
}

impl App {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let signup = SignUp::new();
        let login = Login::new();
        let status_bar = StatusBar::new();
        let signup_client = SignupClient::new(config.endpoint.clone());
        Ok(Self {
            tick_rate,
            frame_rate,
            components: vec![Box::new(signup), Box::new(login), Box::new(status_bar)],
            should_quit: false,
            should_suspend: false,
            config,
            mode: Mode::SignUp,
            signup_client,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        let size = tui.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        for component in self.components.iter_mut() {
            component.init(area)?;
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            action_tx.send(Action::Quit)?;
                        } else {
                            action_tx.send(Action::Key(key))?;
                        }
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.handle_events(Some(e.clone()))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    // Terminal::draw autoresizes the fullscreen viewport, so
                    // a resize only needs a redraw.
                    Action::Resize(_, _) | Action::Render => {
                        tui.draw(|f| {
                            for component in self.components.iter_mut() {
                                let r = component.draw(f, f.area());
                                if let Err(e) = r {
                                    let _ = action_tx
                                        .send(Action::Error(format!("Failed to draw: {e:?}")));
                                }
                            }
                        })?;
                    }
                    Action::SendSignup(ref request) => {
                        // The request runs off the UI loop; the outcome comes
                        // back as an action.
                        log::info!("submitting registration for {}", request.email);
                        let client = self.signup_client.clone();
                        let request = request.clone();
                        let tx = action_tx.clone();
                        tokio::spawn(async move {
                            let outcome = client.signup(&request).await;
                            let _ = tx.send(Action::SubmitFinished(outcome));
                        });
                    }
                    Action::Navigate(mode) => {
                        log::info!("navigating to {mode:?}");
                        self.mode = mode;
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.update(action.clone())? {
                        action_tx.send(action)?
                    };
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}
