// UI（eframe::App 実装と描画）

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use egui::{Color32, RichText, Vec2};

use crate::app::App;
use crate::application::flipboard::DisplayEvent;
use crate::application::guid::GuidKind;
use crate::constants::{FLIP_COUNT, STRIP_STEP_PX};
use crate::domain::flipboard::ALPHABET_CHARS;
use crate::presentation::state::FlipView;

/// 見出し
const TITLE: &str = "GUID スプリットフラップ表示";

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 初回フレームでログファイルを準備
        static INITIALIZED: AtomicBool = AtomicBool::new(false);
        if !INITIALIZED.swap(true, Ordering::Relaxed) {
            if let Err(e) = crate::logging::init_log_file("flipguid_log.txt") {
                eprintln!("ログファイルの初期化に失敗: {}", e);
            }
            crate::logging::set_verbose(self.verbose_logging);
        }

        // 実時間の経過を仮想時刻としてサービスへ注入
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.service.advance_to(elapsed_ms);

        // 表示イベントの取り込み
        let events: Vec<DisplayEvent> = self.rx.try_iter().collect();
        for event in &events {
            if let DisplayEvent::TargetRejected { index, ch } = event {
                self.push_log(format!(
                    "枠 {} の目標 {:?} は文字表にないため据え置き",
                    index, ch
                ));
            }
            self.view.apply(event);
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            draw_title(self, ui);
        });

        egui::SidePanel::left("left").min_width(380.0).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(8.0, 8.0);
                    draw_controls(self, ui);

                    ui.separator();

                    ui.label("ログ");
                    for line in &self.log_lines {
                        ui.monospace(line);
                    }
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    draw_board(self, ui);
                });
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// 見出しをせり上がりで描く
fn draw_title(app: &App, ui: &mut egui::Ui) {
    let elapsed = app.started.elapsed().as_secs_f32();
    let height = 40.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let font = egui::FontId::proportional(24.0);
    let base = ui.visuals().strong_text_color();

    let mut x = rect.min.x + 8.0;
    for (i, ch) in TITLE.chars().enumerate() {
        let dy = app.reveal.offset_y(i, elapsed);
        let alpha = (app.reveal.opacity(i, elapsed) * 255.0) as u8;
        let color = Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);
        let used = painter.text(
            egui::pos2(x, rect.center().y + dy),
            egui::Align2::LEFT_CENTER,
            ch,
            font.clone(),
            color,
        );
        x += used.width();
    }
}

/// 左ペインの操作・状態表示
fn draw_controls(app: &mut App, ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.label("生成と操作");

        ui.horizontal(|ui| {
            if ui.button("ゼロ").clicked() {
                app.generate(GuidKind::Zero);
            }
            if ui.button("ランダム v4").clicked() {
                app.generate(GuidKind::RandomV4);
            }
            if ui.button("時刻ベース").clicked() {
                app.generate(GuidKind::TimeBased);
            }
        });

        ui.horizontal(|ui| {
            if ui.button("コピー").clicked() {
                let copied = app.copy_result();
                ui.ctx().output_mut(|o| o.copied_text = copied);
            }
            if ui
                .add_enabled(!app.history.is_empty(), egui::Button::new("履歴を保存…"))
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_title("保存先の選択")
                    .set_file_name(&app.out_name)
                    .save_file()
                {
                    app.out_name = path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .into();
                    app.save_history(&path);
                }
            }
        });

        if ui.checkbox(&mut app.verbose_logging, "詳細ログ").changed() {
            crate::logging::set_verbose(app.verbose_logging);
        }

        ui.label(if app.service.is_idle() {
            "待機中"
        } else {
            "回転中…"
        });
        ui.monospace(format!(
            "現在値: {} / 予約ステップ: {} / 棄却: {}",
            app.service.rendered_string(),
            app.service.pending_steps(),
            app.view.rejected_count,
        ));
    });
}

/// フリップ盤（36 枠を 1 列に並べる。区切りのハイフンも枠のひとつ）
fn draw_board(app: &App, ui: &mut egui::Ui) {
    ui.label("フリップ盤（8-4-4-4-12）");
    ui.add_space(6.0);

    let cell = Vec2::new(30.0, 44.0);
    let gap = 3.0;
    let width = FLIP_COUNT as f32 * cell.x + (FLIP_COUNT - 1) as f32 * gap;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, cell.y), egui::Sense::hover());

    for (i, flip) in app.view.flips.iter().enumerate() {
        let x0 = rect.min.x + i as f32 * (cell.x + gap);
        let r = egui::Rect::from_min_size(egui::pos2(x0, rect.min.y), cell);
        draw_flip(ui, r, flip);
    }

    ui.add_space(8.0);
    if let Some(target) = &app.view.last_target {
        ui.label(
            RichText::new(format!("目標: {}", target))
                .monospace()
                .color(Color32::GRAY),
        );
    }
}

/// 1 枠分の描画。背面に文字帯、前面に現在値のオーバーレイ
fn draw_flip(ui: &egui::Ui, rect: egui::Rect, flip: &FlipView) {
    let painter = ui.painter_at(rect);
    let (fill, stroke) = if flip.spinning {
        (
            Color32::from_rgb(254, 243, 199),
            egui::Stroke::new(1.0, Color32::from_rgb(245, 158, 11)),
        )
    } else {
        (
            Color32::from_rgb(238, 242, 255),
            egui::Stroke::new(1.0, Color32::from_rgb(99, 102, 241)),
        )
    };
    painter.rect_filled(rect, 4.0, fill);
    painter.rect_stroke(rect, 4.0, stroke);

    // 文字帯：表全体を strip_top だけずらして描き、枠の外は切り取られる
    let strip_font = egui::FontId::monospace(13.0);
    for (k, &ch) in ALPHABET_CHARS.iter().enumerate() {
        let y = rect.min.y + flip.strip_top + (k as f32 + 0.5) * STRIP_STEP_PX;
        if y < rect.min.y - STRIP_STEP_PX || y > rect.max.y + STRIP_STEP_PX {
            continue;
        }
        painter.text(
            egui::pos2(rect.center().x, y),
            egui::Align2::CENTER_CENTER,
            ch,
            strip_font.clone(),
            Color32::from_rgba_unmultiplied(99, 102, 241, 70),
        );
    }

    // 現在値のオーバーレイ
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        flip.display_char(),
        egui::FontId::monospace(22.0),
        Color32::from_rgb(30, 30, 30),
    );
}
