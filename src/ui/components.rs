//! Painting document nodes with egui widgets
//!
//! Text reaches egui as plain strings, never as markup.

use crate::constants::POSTS_ID;
use crate::dom::{Document, ElementData, NodeId, NodeKind};
use crate::theme;
use eframe::egui;

/// Height kept by an empty feed so it can still be clicked
const FEED_MIN_HEIGHT: f32 = 48.0;

fn click_area_id(id: NodeId) -> egui::Id {
    egui::Id::new(("dom-click-area", id))
}

/// Make everything `add_contents` paints clickable as `id`.
///
/// The area is sensed with last frame's rect before the contents are added,
/// so controls inside it stay on top and keep their own clicks. A click that
/// a nested control or area already reported is not reported again.
fn click_area(
    ui: &mut egui::Ui,
    id: NodeId,
    clicks: &mut Vec<NodeId>,
    add_contents: impl FnOnce(&mut egui::Ui, &mut Vec<NodeId>) -> egui::Rect,
) {
    let key = click_area_id(id);
    let area = ui
        .ctx()
        .data(|d| d.get_temp::<egui::Rect>(key))
        .map(|rect| ui.interact(rect, key, egui::Sense::click()));

    let before = clicks.len();
    let rect = add_contents(ui, clicks);
    ui.ctx().data_mut(|d| d.insert_temp(key, rect));

    if area.is_some_and(|r| r.clicked()) && clicks.len() == before {
        clicks.push(id);
    }
}

/// Paint `id` and its subtree. Nodes clicked this frame (controls, post cards
/// and the feed itself) are pushed onto `clicks` so they can be dispatched
/// once the document is unlocked.
pub fn paint_node(ui: &mut egui::Ui, doc: &Document, id: NodeId, clicks: &mut Vec<NodeId>) {
    let element = match doc.kind(id) {
        Some(NodeKind::Element(element)) => element,
        Some(NodeKind::Text(text)) => {
            if !text.trim().is_empty() {
                ui.label(text.as_str());
            }
            return;
        }
        None => return,
    };

    let color = if doc.closest(id, "header").is_some() {
        theme::TEXT_ON_DARK
    } else {
        theme::TEXT_PRIMARY
    };

    match element.tag.as_str() {
        "h1" => {
            ui.label(
                egui::RichText::new(doc.text_content(id))
                    .size(26.0)
                    .strong()
                    .color(color),
            );
        }
        "h2" => {
            ui.label(
                egui::RichText::new(doc.text_content(id))
                    .size(18.0)
                    .strong()
                    .color(color),
            );
        }
        "h3" => {
            ui.label(
                egui::RichText::new(doc.text_content(id))
                    .size(16.0)
                    .strong()
                    .color(color),
            );
        }
        "p" => {
            let text = egui::RichText::new(doc.text_content(id)).color(color);
            let text = if element.has_class("author-name") || element.has_class("footer-date") {
                text.color(theme::TEXT_MUTED).small()
            } else {
                text
            };
            ui.label(text);
        }
        "a" => {
            let label = doc.text_content(id);
            let response = if element.has_class("btn") {
                ui.add(theme::button_accent(label))
            } else {
                ui.link(label)
            };
            let response = match element.get_attribute("href") {
                Some(href) => response.on_hover_text(href),
                None => response,
            };
            if response.clicked() {
                clicks.push(id);
            }
        }
        "button" => {
            let label = doc.text_content(id);
            let button = if element.has_class("delete-btn") {
                theme::button_danger(label)
            } else if element.has_class("create-Post-Btn") {
                theme::button_accent(label)
            } else {
                theme::button(label)
            };
            if ui.add(button).clicked() {
                clicks.push(id);
            }
        }
        "img" => {
            let alt = element.get_attribute("alt").unwrap_or("image");
            let src = element.get_attribute("src").unwrap_or_default();
            ui.add(egui::Label::new(
                egui::RichText::new(format!("[{alt}]"))
                    .italics()
                    .color(theme::TEXT_MUTED),
            ))
            .on_hover_text(src);
        }
        _ => paint_container(ui, doc, id, element, clicks),
    }
}

fn paint_children(ui: &mut egui::Ui, doc: &Document, id: NodeId, clicks: &mut Vec<NodeId>) {
    for &child in doc.children(id) {
        paint_node(ui, doc, child, clicks);
    }
}

fn paint_container(
    ui: &mut egui::Ui,
    doc: &Document,
    id: NodeId,
    element: &ElementData,
    clicks: &mut Vec<NodeId>,
) {
    let children = doc.children(id);

    if element.has_class("main-section") {
        ui.horizontal_top(|ui| {
            for &child in children {
                let is_sidebar = doc.class_list_contains(child, "sidebar");
                ui.vertical(|ui| {
                    if is_sidebar {
                        ui.set_width(theme::SIDEBAR_WIDTH);
                    }
                    paint_node(ui, doc, child, clicks);
                });
            }
        });
    } else if element.tag == "header" {
        theme::header_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            paint_children(ui, doc, id, clicks);
        });
    } else if element.has_class("sidebar") {
        theme::sidebar_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            paint_children(ui, doc, id, clicks);
        });
    } else if element.id() == Some(POSTS_ID) {
        // The whole feed is clickable, cards included
        click_area(ui, id, clicks, |ui, clicks| {
            ui.vertical(|ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(FEED_MIN_HEIGHT);
                paint_children(ui, doc, id, clicks);
            })
            .response
            .rect
        });
    } else if element.has_class("post") {
        click_area(ui, id, clicks, |ui, clicks| {
            theme::card_frame()
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    paint_children(ui, doc, id, clicks);
                })
                .response
                .rect
        });
    } else if element.has_class("blogger-item") {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            paint_children(ui, doc, id, clicks);
        });
    } else if ["buttons", "post-buttons", "header-with-btn"]
        .iter()
        .any(|c| element.has_class(c))
    {
        ui.horizontal(|ui| paint_children(ui, doc, id, clicks));
    } else if element.tag == "footer" {
        ui.separator();
        paint_children(ui, doc, id, clicks);
    } else if !children.is_empty()
        && children
            .iter()
            .all(|&c| matches!(doc.kind(c), Some(NodeKind::Text(_))))
    {
        // Leaf like div.blogger-name
        ui.label(egui::RichText::new(doc.text_content(id)).strong());
    } else {
        ui.vertical(|ui| paint_children(ui, doc, id, clicks));
    }
}
