use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, View};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.mode == AppMode::Help {
        return vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem {
                key: "Esc",
                desc: "close",
            }],
        }];
    }

    let mut groups = Vec::new();
    match state.view() {
        View::Suggestions => groups.push(FooterGroup {
            name: "LIST",
            items: vec![
                FooterItem {
                    key: "↑/↓",
                    desc: "move",
                },
                FooterItem {
                    key: "Enter",
                    desc: "open",
                },
                FooterItem {
                    key: "Click",
                    desc: "open",
                },
            ],
        }),
        View::Details | View::Idle => {}
    }

    groups.push(FooterGroup {
        name: "QUERY",
        items: vec![
            FooterItem {
                key: "C-u",
                desc: "clear",
            },
            FooterItem {
                key: "Esc",
                desc: if state.query().is_empty() { "quit" } else { "clear" },
            },
        ],
    });

    groups.push(FooterGroup {
        name: "APP",
        items: vec![
            FooterItem {
                key: "F1",
                desc: "help",
            },
            FooterItem {
                key: "C-c",
                desc: "quit",
            },
        ],
    });

    groups
}
