//! Workflow diagram: a grid of named areas with dashed connector lines drawn
//! into an SVG layer that spans the board's whole scroll area.

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{DomRect, Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SiteConfig;

pub const LINE_COLOR: &str = "#3b82f6";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    Order,
    Auto,
    Send,
    Shift,
    Contact,
    Report,
    Workdata,
    Invoice,
    Payment,
    Mgmt,
    Payroll,
    Daily,
    Ledger,
    Yearend,
}

impl Area {
    pub const ALL: [Area; 14] = [
        Area::Order,
        Area::Auto,
        Area::Send,
        Area::Shift,
        Area::Contact,
        Area::Report,
        Area::Workdata,
        Area::Invoice,
        Area::Payment,
        Area::Mgmt,
        Area::Payroll,
        Area::Daily,
        Area::Ledger,
        Area::Yearend,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Area::Order => "area-order",
            Area::Auto => "area-auto",
            Area::Send => "area-send",
            Area::Shift => "area-shift",
            Area::Contact => "area-contact",
            Area::Report => "area-report",
            Area::Workdata => "area-workdata",
            Area::Invoice => "area-invoice",
            Area::Payment => "area-payment",
            Area::Mgmt => "area-mgmt",
            Area::Payroll => "area-payroll",
            Area::Daily => "area-daily",
            Area::Ledger => "area-ledger",
            Area::Yearend => "area-yearend",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Area::Order => "受注・依頼",
            Area::Auto => "自動配置",
            Area::Send => "指示書送信",
            Area::Shift => "シフト確定",
            Area::Contact => "上下番連絡",
            Area::Report => "日報・報告",
            Area::Workdata => "勤務実績",
            Area::Invoice => "請求書発行",
            Area::Payment => "入金管理",
            Area::Mgmt => "経営分析",
            Area::Payroll => "給与計算",
            Area::Daily => "日払い",
            Area::Ledger => "賃金台帳",
            Area::Yearend => "年末調整",
        }
    }

    /// (row, column) in the board grid.
    fn cell(self) -> (u8, u8) {
        match self {
            Area::Order => (1, 1),
            Area::Auto => (1, 2),
            Area::Send => (1, 3),
            Area::Shift => (1, 4),
            Area::Contact => (2, 4),
            Area::Report => (2, 3),
            Area::Workdata => (2, 2),
            Area::Invoice => (3, 2),
            Area::Payment => (3, 3),
            Area::Mgmt => (3, 4),
            Area::Payroll => (4, 2),
            Area::Daily => (5, 1),
            Area::Ledger => (5, 2),
            Area::Yearend => (5, 3),
        }
    }
}

pub const CONNECTIONS: [(Area, Area); 13] = [
    (Area::Order, Area::Auto),
    (Area::Auto, Area::Send),
    (Area::Send, Area::Shift),
    (Area::Shift, Area::Contact),
    (Area::Contact, Area::Report),
    (Area::Report, Area::Workdata),
    (Area::Workdata, Area::Invoice),
    (Area::Invoice, Area::Payment),
    (Area::Payment, Area::Mgmt),
    (Area::Workdata, Area::Payroll),
    (Area::Payroll, Area::Daily),
    (Area::Payroll, Area::Ledger),
    (Area::Payroll, Area::Yearend),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl From<DomRect> for Rect {
    fn from(r: DomRect) -> Self {
        Self { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Line between two anchor centers in board coordinates, including how far
/// the board is scrolled.
pub fn connector(start: &Rect, end: &Rect, board: &Rect, scroll: (f64, f64)) -> Segment {
    let (sx, sy) = start.center();
    let (ex, ey) = end.center();
    Segment {
        x1: sx - board.left + scroll.0,
        y1: sy - board.top + scroll.1,
        x2: ex - board.left + scroll.0,
        y2: ey - board.top + scroll.1,
    }
}

/// Segments for every connection whose two anchors can be measured.
pub fn layout_segments(board: &Rect, scroll: (f64, f64), measure: impl Fn(Area) -> Option<Rect>) -> Vec<Segment> {
    CONNECTIONS
        .iter()
        .filter_map(|&(from, to)| Some(connector(&measure(from)?, &measure(to)?, board, scroll)))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Overlay {
    width: i32,
    height: i32,
    segments: Vec<Segment>,
}

fn measure(board: &Element) -> Overlay {
    let board_rect = Rect::from(board.get_bounding_client_rect());
    let scroll = (board.scroll_left() as f64, board.scroll_top() as f64);
    let segments = layout_segments(&board_rect, scroll, |area| {
        board
            .query_selector(&format!(".{}", area.class()))
            .ok()
            .flatten()
            .map(|el| Rect::from(el.get_bounding_client_rect()))
    });
    Overlay {
        width: board.scroll_width(),
        height: board.scroll_height(),
        segments,
    }
}

#[function_component(DiagramBoard)]
pub fn diagram_board() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let board_ref = use_node_ref();
    let overlay = use_state_eq(Overlay::default);
    let pending_resize = use_mut_ref(|| None::<Timeout>);

    let redraw = {
        let board_ref = board_ref.clone();
        let overlay = overlay.clone();
        Callback::from(move |_: ()| {
            if let Some(board) = board_ref.cast::<Element>() {
                let next = measure(&board);
                debug!("Diagram redrawn with {} connectors", next.segments.len());
                overlay.set(next);
            }
        })
    };

    {
        let redraw = redraw.clone();
        let settle_ms = config.diagram.settle_delay_ms;
        use_effect_with_deps(
            move |_| {
                redraw.emit(());
                let settle = Timeout::new(settle_ms, move || redraw.emit(()));
                move || drop(settle)
            },
            (),
        );
    }

    {
        let redraw = redraw.clone();
        use_event_with_window("load", move |_: Event| redraw.emit(()));
    }

    {
        let redraw = redraw.clone();
        let debounce_ms = config.diagram.resize_debounce_ms;
        use_event_with_window("resize", move |_: Event| {
            let redraw = redraw.clone();
            // Replacing the handle cancels the previous timer.
            *pending_resize.borrow_mut() = Some(Timeout::new(debounce_ms, move || redraw.emit(())));
        });
    }

    let svg_style = format!("width: {}px; height: {}px;", overlay.width, overlay.height);

    html! {
        <div class="diagram-board" ref={board_ref}>
            <svg class="diagram-svg" style={svg_style}>
                { for overlay.segments.iter().map(|s| html! {
                    <line
                        x1={s.x1.to_string()}
                        y1={s.y1.to_string()}
                        x2={s.x2.to_string()}
                        y2={s.y2.to_string()}
                        stroke={LINE_COLOR}
                        stroke-width="2"
                        stroke-dasharray="6, 4"
                        stroke-linecap="round"
                    />
                }) }
            </svg>
            { for Area::ALL.iter().map(|area| {
                let (row, col) = area.cell();
                html! {
                    <div
                        class={classes!("diagram-node", area.class())}
                        style={format!("grid-row: {}; grid-column: {};", row, col)}
                    >
                        { area.label() }
                    </div>
                }
            }) }
        </div>
    }
}
