//! Timeline panel UI rendering
//!
//! Draws one row per interval with its start, move and end handles, and
//! turns pointer drags on a handle into `begin` / `drag` / `finish` calls.

use eframe::egui;
use egui::{Color32, ScrollArea};
use rtimeline::constants::ROW_HEIGHT;
use rtimeline::{DragHandler, HandleKind, ZoomController};
use crate::app::{ActiveDrag, AppState, ApplicationCoordinator};
use crate::utils::format_timestamp;

const BAR_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
const HANDLE_COLOR: Color32 = Color32::from_rgb(40, 80, 120);
const ACTIVE_COLOR: Color32 = Color32::from_rgb(255, 180, 60);
const MARKER_COLOR: Color32 = Color32::from_rgb(200, 90, 90);

/// Pointer event on a handle, applied after the row loop releases its borrows.
enum HandleEvent {
    Started(ActiveDrag),
    Dragged(f32),
    Stopped,
}

/// Renders the timeline rows and routes drag gestures to the handles.
pub fn render_timeline_panel(ui: &mut egui::Ui, state: &mut AppState) {
    if state.document.is_none() {
        ui.label("No plan loaded - open a plan file or generate a sample plan");
        return;
    }

    render_time_axis(ui, state);
    ui.separator();

    // Horizontal wheel/trackpad scrolling pans the timeline
    let canvas_rect = ui.available_rect_before_wrap();
    let scroll_x = ui.input(|i| i.smooth_scroll_delta.x);
    if scroll_x != 0.0 && ui.rect_contains_pointer(canvas_rect) {
        state.scroll_start -= state.zoom.to_millis(f64::from(scroll_x));
    }

    let mut events = Vec::new();

    let AppState { document, zoom, scroll_start, active_drag, .. } = &mut *state;
    let Some(document) = document.as_mut() else {
        return;
    };
    let offset_px = -zoom.to_pixels(*scroll_start);

    ScrollArea::vertical()
        .id_salt("timeline_scroll_area")
        .show(ui, |ui| {
            for (row_index, row) in document.rows.iter_mut().enumerate() {
                let (row_rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), ROW_HEIGHT),
                    egui::Sense::hover(),
                );
                let left = row_rect.left();

                let (start, duration) = {
                    let drag_handler = document.drag_handler.borrow();
                    (drag_handler.start(row.id), drag_handler.duration(row.id))
                };
                let bar_rect = egui::Rect::from_min_size(
                    egui::pos2(left + (zoom.to_pixels(start) + offset_px) as f32, row_rect.top() + 2.0),
                    egui::vec2(zoom.to_pixels(duration).max(1.0) as f32, ROW_HEIGHT - 4.0),
                );
                ui.painter().rect_filled(bar_rect, 3.0, BAR_COLOR);
                ui.painter().text(
                    bar_rect.left_center() + egui::vec2(6.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    &row.name,
                    egui::FontId::proportional(12.0),
                    Color32::WHITE,
                );

                for (kind, handle) in row.handles.iter_mut() {
                    let style = handle.style(&*zoom).shifted(offset_px);
                    if style.width <= 0.0 {
                        continue;
                    }

                    let handle_rect = egui::Rect::from_min_size(
                        egui::pos2(left + style.left as f32, bar_rect.top()),
                        egui::vec2(style.width as f32, bar_rect.height()),
                    );
                    let response = ui
                        .interact(handle_rect, ui.id().with(("handle", row.id, *kind)), egui::Sense::drag())
                        .on_hover_cursor(match kind {
                            HandleKind::Move => egui::CursorIcon::Grab,
                            HandleKind::Start | HandleKind::End => egui::CursorIcon::ResizeHorizontal,
                        });

                    if *kind != HandleKind::Move {
                        let color = if handle.is_dragging() { ACTIVE_COLOR } else { HANDLE_COLOR };
                        ui.painter().rect_filled(handle_rect, 2.0, color);
                    } else if handle.is_dragging() {
                        ui.painter().rect_stroke(
                            bar_rect,
                            3.0,
                            egui::Stroke::new(2.0, ACTIVE_COLOR),
                            egui::StrokeKind::Outside,
                        );
                    }

                    if response.drag_started() {
                        events.push(HandleEvent::Started(ActiveDrag {
                            row: row_index,
                            kind: *kind,
                            total_delta: 0.0,
                        }));
                    }
                    if response.dragged() {
                        events.push(HandleEvent::Dragged(response.drag_delta().x));
                    }
                    if response.drag_stopped() {
                        events.push(HandleEvent::Stopped);
                    }
                }
            }

            // Markers span every row
            let content_rect = ui.min_rect();
            for &marker in &document.markers {
                let x = content_rect.left() + (zoom.to_pixels(marker) + offset_px) as f32;
                ui.painter().vline(x, content_rect.y_range(), egui::Stroke::new(1.0, MARKER_COLOR));
            }
        });

    // Pointer released outside of any handle
    if active_drag.is_some() && !ui.input(|i| i.pointer.any_down()) && events.is_empty() {
        events.push(HandleEvent::Stopped);
    }

    for event in events {
        match event {
            HandleEvent::Started(drag) => ApplicationCoordinator::begin_drag(state, drag),
            HandleEvent::Dragged(delta) => ApplicationCoordinator::continue_drag(state, delta),
            HandleEvent::Stopped => ApplicationCoordinator::finish_drag(state),
        }
    }
}

/// Renders the start and end timestamps of the visible range.
fn render_time_axis(ui: &mut egui::Ui, state: &AppState) {
    let (axis_rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), ROW_HEIGHT), egui::Sense::hover());
    let visible_end = state.scroll_start + state.zoom.to_millis(f64::from(axis_rect.width()));
    let color = ui.visuals().text_color();
    let font = egui::FontId::monospace(11.0);

    ui.painter().text(axis_rect.left_center(), egui::Align2::LEFT_CENTER, format_timestamp(state.scroll_start), font.clone(), color);
    ui.painter().text(axis_rect.right_center(), egui::Align2::RIGHT_CENTER, format_timestamp(visible_end), font, color);
}
