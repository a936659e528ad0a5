//! Vertical slider widget
//!
//! Hosts a [`Slider`] inside iced. Pointer and finger events are turned into
//! [`SliderInput`] messages for the application to feed back into the slider,
//! and painting goes through a canvas frame.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::border::Radius;
use iced::event::Event;
use iced::widget::canvas::{self, Frame, Path};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse, touch};

use crate::assets::Image;
use crate::slider::{Canvas, RoundedRect, Slider, TouchEvent, TouchPhase};

/// Input the widget asks the application to apply to its [`Slider`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderInput {
    /// The layout pass produced a new size
    Resized(Size),
    /// A pointer or finger sample, relative to the slider's top edge
    Touch(TouchEvent),
}

impl SliderInput {
    /// Apply this input to `slider`. Returns whether a touch was handled.
    pub fn apply(self, slider: &mut Slider) -> bool {
        match self {
            SliderInput::Resized(size) => {
                slider.resize(size);
                true
            }
            SliderInput::Touch(event) => slider.handle_touch(event),
        }
    }
}

/// A vertical slider widget
pub struct VerticalSlider<'a, Message> {
    slider: &'a Slider,
    on_input: Box<dyn Fn(SliderInput) -> Message + 'a>,
    width: Length,
    height: Length,
    content: Element<'a, Message>,
}

impl<'a, Message: 'a> VerticalSlider<'a, Message> {
    /// Creates a new vertical slider
    pub fn new<F>(slider: &'a Slider, on_input: F) -> Self
    where
        F: Fn(SliderInput) -> Message + 'a,
    {
        let content = canvas::Canvas::<Painter<'a>, Message>::new(Painter { slider })
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        Self {
            slider,
            on_input: Box::new(on_input),
            width: Length::Fixed(120.0),
            height: Length::Fixed(320.0),
            content,
        }
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// State for the vertical slider
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    is_dragging: bool,
}

/// What the widget does in response to one event
#[derive(Debug, Clone, Copy, PartialEq)]
struct Reaction {
    input: Option<SliderInput>,
    capture: bool,
}

impl Reaction {
    const IGNORED: Self = Self {
        input: None,
        capture: false,
    };
}

impl State {
    /// Track the drag and turn `event` into slider input.
    /// Positions are reported relative to the top of `bounds`.
    fn react(&mut self, event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> Reaction {
        let sample = |phase: TouchPhase, position: Point| {
            Some(SliderInput::Touch(TouchEvent::new(phase, position.y - bounds.y)))
        };
        let captured = |input: Option<SliderInput>| Reaction {
            input,
            capture: true,
        };

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match cursor.position_over(bounds) {
                    Some(position) => {
                        self.is_dragging = true;
                        captured(sample(TouchPhase::Pressed, position))
                    }
                    None => Reaction::IGNORED,
                }
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    self.is_dragging = true;
                    captured(sample(TouchPhase::Pressed, *position))
                } else {
                    Reaction::IGNORED
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if self.is_dragging => captured(
                cursor
                    .land()
                    .position()
                    .and_then(|position| sample(TouchPhase::Moved, position)),
            ),
            Event::Touch(touch::Event::FingerMoved { position, .. }) if self.is_dragging => {
                captured(sample(TouchPhase::Moved, *position))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if self.is_dragging => {
                self.is_dragging = false;
                captured(
                    cursor
                        .land()
                        .position()
                        .and_then(|position| sample(TouchPhase::Released, position)),
                )
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) if self.is_dragging => {
                self.is_dragging = false;
                captured(sample(TouchPhase::Released, *position))
            }
            Event::Touch(touch::Event::FingerLost { position, .. }) if self.is_dragging => {
                // Not captured: the host keeps its default handling
                self.is_dragging = false;
                Reaction {
                    input: sample(TouchPhase::Lost, *position),
                    capture: false,
                }
            }
            _ => Reaction::IGNORED,
        }
    }
}

impl<'a, Message> Widget<Message, Theme, Renderer> for VerticalSlider<'a, Message> {
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let size = limits.resolve(self.width, self.height, Size::ZERO);

        let child_limits = layout::Limits::new(Size::ZERO, size);
        let child = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &child_limits);

        layout::Node::with_children(size, vec![child])
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        if bounds.size() != self.slider.size() {
            shell.publish((self.on_input)(SliderInput::Resized(bounds.size())));
        }
        if self.slider.take_redraw_request() {
            shell.request_redraw();
        }

        let reaction = state.react(event, bounds, cursor);
        if let Some(input) = reaction.input {
            shell.publish((self.on_input)(input));
        }
        if reaction.capture {
            shell.capture_event();
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<VerticalSlider<'a, Message>> for Element<'a, Message> {
    fn from(slider: VerticalSlider<'a, Message>) -> Self {
        Element::new(slider)
    }
}

/// Creates a new vertical slider
pub fn vertical_slider<'a, Message: 'a>(
    slider: &'a Slider,
    on_input: impl Fn(SliderInput) -> Message + 'a,
) -> VerticalSlider<'a, Message> {
    VerticalSlider::new(slider, on_input)
}

/// Paints the slider into a canvas frame
struct Painter<'a> {
    slider: &'a Slider,
}

impl<Message> canvas::Program<Message> for Painter<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.slider.render(&mut FrameCanvas::new(&mut frame));
        vec![frame.into_geometry()]
    }
}

/// [`Canvas`] over an iced canvas frame.
///
/// The frame can only clip to rectangles, so solid fills are shaped with the
/// corner radii the rounded clip would leave on them.
pub struct FrameCanvas<'a> {
    frame: &'a mut Frame,
    clip: Option<RoundedRect>,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self { frame, clip: None }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn clip_rounded(&mut self, bounds: Rectangle, radius: f32) {
        self.clip = Some(RoundedRect { bounds, radius });
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        let Some(clip) = self.clip else {
            self.frame.fill_rectangle(rect.position(), rect.size(), color);
            return;
        };

        let Some((visible, radius)) = rounded_part(rect, clip) else {
            return;
        };

        let path = Path::rounded_rectangle(visible.position(), visible.size(), radius);
        self.frame.fill(&path, color);
    }

    fn draw_image(&mut self, image: &Image, rect: Rectangle) {
        let handle = image.handle().clone();

        let Some(clip) = self.clip else {
            self.frame.draw_image(rect, canvas::Image::new(handle));
            return;
        };
        let Some((visible, border_radius)) = rounded_part(rect, clip) else {
            return;
        };

        self.frame.with_clip(visible, |frame| {
            // Inside the clip the origin moves to the clip's top-left corner
            let local = Rectangle {
                x: rect.x - visible.x,
                y: rect.y - visible.y,
                ..rect
            };
            frame.draw_image(
                local,
                canvas::Image {
                    border_radius,
                    ..canvas::Image::new(handle)
                },
            );
        });
    }
}

/// Part of `rect` left inside the rounded `clip`, with the radii to round it by.
///
/// Images are rounded against their clip bounds by the renderer, so they are
/// clipped to this part and given its radii.
fn rounded_part(rect: Rectangle, clip: RoundedRect) -> Option<(Rectangle, Radius)> {
    let visible = rect.intersection(&clip.bounds)?;
    if visible.width <= 0.0 || visible.height <= 0.0 {
        return None;
    }
    Some((visible, clipped_radius(visible, clip)))
}

/// Corner radii of `rect` after clipping it to the rounded `clip`.
///
/// A corner keeps the clip's curvature minus how far it is inset from the
/// matching clip corner, capped to half of the rectangle's shorter side.
fn clipped_radius(rect: Rectangle, clip: RoundedRect) -> Radius {
    let bounds = clip.bounds;
    let radius = clip
        .radius
        .min(bounds.width / 2.0)
        .min(bounds.height / 2.0)
        .max(0.0);
    let limit = rect.width.min(rect.height) / 2.0;

    let left = rect.x - bounds.x;
    let top = rect.y - bounds.y;
    let right = (bounds.x + bounds.width) - (rect.x + rect.width);
    let bottom = (bounds.y + bounds.height) - (rect.y + rect.height);

    let corner = |dx: f32, dy: f32| (radius - dx.max(dy)).clamp(0.0, limit);

    Radius {
        top_left: corner(left, top),
        top_right: corner(right, top),
        bottom_right: corner(right, bottom),
        bottom_left: corner(left, bottom),
    }
}
