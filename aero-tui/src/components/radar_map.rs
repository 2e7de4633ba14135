use aero_core::{Action, Coordinates};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine, Map, MapResolution},
    Frame,
};

use super::card::{card, ACCENT, BORDER, LABEL};
use super::Component;

/// Ticks per full sweep of the radar line
const SWEEP_TICKS: u32 = 120;
/// Length of the sweep line in degrees
const SWEEP_RADIUS: f64 = 20.0;

/// World map with the current position and a rotating radar sweep
pub struct RadarMap;

pub struct RadarMapProps {
    pub coords: Coordinates,
    pub tick: u32,
}

impl Component<Action> for RadarMap {
    type Props<'a> = RadarMapProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Coordinates { lat, lon } = props.coords;
        let turn = f64::from(props.tick % SWEEP_TICKS) / f64::from(SWEEP_TICKS);
        let angle = turn * std::f64::consts::TAU;

        let block = card("Local Radar").title_bottom(
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(ACCENT)),
                Span::styled("LIVE MONITORING ", Style::default().fg(LABEL).bold()),
                Span::styled(format!("{} ", props.coords), Style::default().fg(LABEL)),
            ]),
        );

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(move |ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::Low,
                    color: BORDER,
                });
                ctx.layer();
                ctx.draw(&CanvasLine {
                    x1: lon,
                    y1: lat,
                    x2: lon + SWEEP_RADIUS * angle.cos(),
                    y2: lat + SWEEP_RADIUS * angle.sin(),
                    color: ACCENT,
                });
                let marker = Span::styled("◉", Style::default().fg(Color::LightBlue).bold());
                ctx.print(lon, lat, marker);
            });
        frame.render_widget(canvas, area);
    }
}
