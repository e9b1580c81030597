use std::{
    sync::mpsc::{self, Receiver, TryRecvError},
    time::Duration,
};

use country_sampler::{render, AppState, CountriesClient, CountryCard, Pool};
use eframe::egui::{self, Color32, RichText, TextEdit};

type FetchOutcome = Result<country_sampler::Result<Pool>, String>;

struct CountryGuiApp {
    state: AppState,
    input: String,
    rx: Option<Receiver<FetchOutcome>>,
}

impl CountryGuiApp {
    fn new() -> Self {
        let mut app = Self {
            state: AppState::new(),
            input: String::new(),
            rx: None,
        };
        app.start_fetch();
        app
    }

    fn start_fetch(&mut self) {
        if !self.state.start_loading() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        std::thread::spawn(move || {
            let _ = tx.send(run_fetch());
        });
    }

    fn poll_response(&mut self) {
        let Some(rx) = &self.rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(outcome)) => {
                self.rx = None;
                self.state.finish_loading(outcome);
            }
            Ok(Err(message)) => {
                self.rx = None;
                self.state.abort_loading(message);
            }
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                self.state
                    .abort_loading("Background worker disconnected unexpectedly.");
            }
            Err(TryRecvError::Empty) => {}
        }
    }
}

impl eframe::App for CountryGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_response();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("Random Countries");
            ui.separator();

            ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut self.input)
                        .hint_text("Type a Number (1-10)")
                        .desired_width(180.0),
                );
                if response.changed() {
                    self.state.input(&self.input);
                    // controlled input: rejected keystrokes snap back
                    self.input = self.state.input_text();
                }

                if self.state.is_loading() {
                    ui.spinner();
                    ui.label("Loading countries...");
                }
            });
        });

        let view = render::view(&self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(view.status.as_str());

            if let Some(error) = &view.error {
                ui.colored_label(Color32::from_rgb(215, 40, 40), error.as_str());
            }

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for card in &view.cards {
                        render_card(ui, card);
                    }
                });
            });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn render_card(ui: &mut egui::Ui, card: &CountryCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(220.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(&card.name).strong().size(16.0));
            ui.label(format!("Capital: {}", card.capital));
            ui.label(format!("Languages: {}", card.languages.join(", ")));
        });
    });
}

fn run_fetch() -> FetchOutcome {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("runtime init failed: {err}"))?;
    Ok(runtime.block_on(async move { CountriesClient::new().fetch_countries().await }))
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Random Countries",
        options,
        Box::new(|_cc| Box::new(CountryGuiApp::new())),
    )
}
