use iced::{
    Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse,
    widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text},
};

use super::{BLUSH, DEEP_PINK, PINK};
use crate::{
    models::Coordinate,
    presenter::{MapView, MarkerKind},
};

const MAP_HEIGHT: f32 = 200.0;
const USER_BLUE: Color = Color::from_rgb8(0x1e, 0x90, 0xff);

/// Flat map sketch: region around the center with one pin per marker.
///
/// Tiles are not drawn, pins are projected linearly inside the region span.
struct MapPanel {
    view: MapView,
}

impl MapPanel {
    fn project(&self, coordinate: Coordinate, bounds: Rectangle) -> Point {
        let dx = (coordinate.longitude - self.view.center.longitude) / self.view.longitude_delta;
        let dy = (self.view.center.latitude - coordinate.latitude) / self.view.latitude_delta;
        Point::new(
            bounds.width / 2.0 + (dx as f32) * bounds.width,
            bounds.height / 2.0 + (dy as f32) * bounds.height,
        )
    }
}

impl<Message> canvas::Program<Message> for MapPanel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BLUSH);

        let center = frame.center();
        frame.stroke(
            &Path::line(Point::new(center.x, 0.0), Point::new(center.x, bounds.height)),
            Stroke::default().with_color(Color::WHITE).with_width(1.0),
        );
        frame.stroke(
            &Path::line(Point::new(0.0, center.y), Point::new(bounds.width, center.y)),
            Stroke::default().with_color(Color::WHITE).with_width(1.0),
        );

        for marker in &self.view.markers {
            let position = self.project(marker.coordinate, bounds);
            let color = match marker.kind {
                MarkerKind::Venue => PINK,
                MarkerKind::User => USER_BLUE,
            };
            frame.fill(&Path::circle(position, 6.0), color);
            frame.fill_text(Text {
                content: marker.title.clone(),
                position: Point::new(position.x + 9.0, position.y - 7.0),
                color: DEEP_PINK,
                size: 12.0.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

pub fn map_panel<'a, Message: 'a>(view: MapView) -> Element<'a, Message> {
    Canvas::new(MapPanel { view })
        .width(Length::Fill)
        .height(Length::Fixed(MAP_HEIGHT))
        .into()
}
