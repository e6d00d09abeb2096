use std::sync::mpsc::{self, Receiver, Sender};

use artic_common::layout::{row_cells, COLUMNS};
use artic_common::{ArtworkId, LoadOutcome, LoadState, PageRequest, ViewController};
use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use reqwest::blocking::Client;
use tracing::error;

use crate::io::{build_client, fetch_page_blocking, resolve_endpoint};
use crate::model::{BulkSelectState, UiMessage};

pub struct DesktopApp {
    controller: ViewController,
    client: Option<Client>,
    endpoint: String,
    tx: Sender<UiMessage>,
    rx: Receiver<UiMessage>,
    bulk: BulkSelectState,
    status: String,
}

/// テーブル操作（グリッド描画後にまとめて反映する）
enum TableAction {
    ToggleRow(ArtworkId),
    SetPage(bool),
}

impl DesktopApp {
    fn start_load(&mut self, request: PageRequest, ctx: &egui::Context) {
        let Some(client) = self.client.clone() else {
            // 取得できないので失敗として即時反映
            let _ = self.tx.send(UiMessage::PageLoaded {
                request,
                outcome: Err(artic_common::FetchError::Network("HTTP client unavailable".to_string())),
            });
            return;
        };
        let tx = self.tx.clone();
        let endpoint = self.endpoint.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let outcome = fetch_page_blocking(&client, &endpoint, request.page);
            let _ = tx.send(UiMessage::PageLoaded { request, outcome });
            ctx.request_repaint();
        });
    }

    fn turn_page(&mut self, zero_based: u32, ctx: &egui::Context) {
        let request = self.controller.on_page_turn(zero_based);
        self.start_load(request, ctx);
    }

    fn poll_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::PageLoaded { request, outcome } => {
                    match self.controller.complete(request, outcome) {
                        LoadOutcome::Applied => {
                            self.status = format!("Loaded page {}", request.page);
                        }
                        LoadOutcome::Failed => {
                            let err = self.controller.last_error().unwrap_or("unknown error");
                            error!(page = request.page, "{err}");
                            self.status = format!("Load failed: {err}");
                        }
                        LoadOutcome::Stale => {}
                    }
                }
            }
        }
    }

    fn apply_bulk_select(&mut self) {
        let added = self.controller.apply_bulk_select(Some(self.bulk.count));
        self.status = format!("Selected {added} more rows");
        self.bulk.open = false;
    }

    fn render_table(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();

        egui::Grid::new("artworks_grid")
            .striped(true)
            .min_col_width(40.0)
            .show(ui, |ui| {
                let mut all_checked = self.controller.is_page_fully_checked();
                if ui.checkbox(&mut all_checked, "").changed() {
                    actions.push(TableAction::SetPage(all_checked));
                }
                for column in COLUMNS {
                    ui.label(RichText::new(column.label).strong());
                }
                ui.end_row();

                for artwork in self.controller.artworks() {
                    let mut checked = self.controller.is_row_checked(artwork.id);
                    if ui.checkbox(&mut checked, "").changed() {
                        actions.push(TableAction::ToggleRow(artwork.id));
                    }
                    for cell in row_cells(artwork) {
                        ui.add(egui::Label::new(cell.replace('\n', " ")).wrap(true));
                    }
                    ui.end_row();
                }
            });

        for action in actions {
            match action {
                TableAction::ToggleRow(id) => self.controller.toggle_row(id),
                TableAction::SetPage(checked) => self.controller.set_page_checked(checked),
            }
        }
    }

    fn render_pager(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let page = self.controller.page();
        let total_pages = self.controller.total_pages();
        let has_previous = self.controller.has_previous();
        let has_next = self.controller.has_next();

        ui.horizontal(|ui| {
            if ui.add_enabled(has_previous, egui::Button::new("«")).clicked() {
                self.turn_page(0, ctx);
            }
            if ui.add_enabled(has_previous, egui::Button::new("‹")).clicked() {
                self.turn_page(page.saturating_sub(2), ctx);
            }
            if total_pages > 0 {
                ui.label(format!("Page {page} of {total_pages}"));
            } else {
                ui.label(format!("Page {page}"));
            }
            if ui.add_enabled(has_next, egui::Button::new("›")).clicked() {
                self.turn_page(page, ctx);
            }
            if ui.add_enabled(has_next && total_pages > 0, egui::Button::new("»")).clicked() {
                self.turn_page(total_pages.saturating_sub(1), ctx);
            }

            ui.separator();
            let first = self.controller.first_record_index();
            let rows = self.controller.artworks().len() as u64;
            let total = self.controller.total_records();
            if rows > 0 {
                ui.label(format!("Showing {} to {} of {}", first + 1, first + rows, total));
            }
        });
    }
}

const CJK_FONT_PATHS: [&str; 4] = [
    r"C:\Windows\Fonts\meiryo.ttc",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
];

/// 最初に読めたフォントファイルの中身
fn first_readable_font(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|path| std::fs::read(path).ok())
}

/// 作品名・作者名に含まれるCJK文字用のフォールバックを登録
pub fn configure_fonts(ctx: &egui::Context) {
    let Some(data) = first_readable_font(&CJK_FONT_PATHS) else {
        return;
    };
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert("cjk_fallback".to_string(), FontData::from_owned(data));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk_fallback".to_string());
    }
    ctx.set_fonts(fonts);
}

impl Default for DesktopApp {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let (client, status) = match build_client() {
            Ok(client) => (Some(client), String::new()),
            Err(err) => (None, err.to_string()),
        };
        Self {
            controller: ViewController::new(),
            client,
            endpoint: resolve_endpoint(),
            tx,
            rx,
            bulk: BulkSelectState { open: false, count: 1 },
            status,
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.state() == LoadState::Idle {
            let request = self.controller.mount();
            self.start_load(request, ctx);
        }
        self.poll_messages();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("Art Institute of Chicago - Artworks");
            ui.horizontal(|ui| {
                ui.label(format!("Total Selected: {}", self.controller.selection().len()));
                if self.controller.is_loading() {
                    ui.spinner();
                }
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Select Rows").clicked() {
                        self.bulk.open = !self.bulk.open;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("pager").show(ctx, |ui| {
            self.render_pager(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                self.render_table(ui);
            });
        });

        if self.bulk.open {
            let mut open = true;
            let mut apply = false;
            egui::Window::new("Select Rows")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut self.bulk.count).clamp_range(1..=1000));
                        if ui.button("Apply").clicked() {
                            apply = true;
                        }
                    });
                });
            if apply {
                self.apply_bulk_select();
            } else if !open {
                self.bulk.open = false;
            }
        }
    }
}
