//! embedded-graphics implementation of the panel renderer

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    CornerRadii, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;
use mountpanel_core::traits::{ButtonRenderer, PanelRenderer, Readout};
use mountpanel_core::ui::Button;

use crate::style::{
    accent_color, readout_anchor, readout_region, BACKGROUND, BUTTON_RADIUS, BUTTON_STROKE,
    DEC_LABEL, FONT, RA_LABEL, SPLASH_TITLE, SPLASH_VERSION, TEXT, TITLE, VERSION,
};

/// Splash screen title
pub const SPLASH_NAME: &str = "OnStepX";

/// Draws the panel onto an RGB565 target
pub struct GraphicsRenderer<D> {
    target: D,
}

impl<D> GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Create a new renderer
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Release the draw target
    pub fn release(self) -> D {
        self.target
    }

    fn text_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(color)
            .background_color(BACKGROUND)
            .build()
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb565,
        alignment: Alignment,
        baseline: Baseline,
    ) -> Result<(), D::Error> {
        let layout = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();
        Text::with_text_style(text, position, Self::text_style(color), layout)
            .draw(&mut self.target)?;
        Ok(())
    }
}

impl<D> ButtonRenderer for GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn draw_button(&mut self, button: &Button) -> Result<(), D::Error> {
        let rect = button.rect();
        let accent = accent_color(button.accent());
        let (fill, label) = if button.is_lit() {
            (accent, BACKGROUND)
        } else {
            (BACKGROUND, accent)
        };

        let area = Rectangle::new(
            Point::new(rect.x as i32, rect.y as i32),
            Size::new(rect.width as u32, rect.height as u32),
        );
        let style = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(accent)
            .stroke_width(BUTTON_STROKE)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        RoundedRectangle::new(area, CornerRadii::new(Size::new_equal(BUTTON_RADIUS)))
            .into_styled(style)
            .draw(&mut self.target)?;

        let text_style = MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(label)
            .build();
        let layout = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(button.label(), area.center(), text_style, layout)
            .draw(&mut self.target)?;
        Ok(())
    }
}

impl<D> PanelRenderer for GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_splash(&mut self, version: &str) -> Result<(), D::Error> {
        self.target.clear(BACKGROUND)?;
        self.draw_text(SPLASH_NAME, SPLASH_TITLE, TITLE, Alignment::Left, Baseline::Top)?;

        let mut line: String<48> = String::new();
        let _ = write!(line, "Version {version}");
        self.draw_text(&line, SPLASH_VERSION, VERSION, Alignment::Left, Baseline::Top)
    }

    fn draw_frame(&mut self) -> Result<(), D::Error> {
        self.target.clear(BACKGROUND)?;
        self.draw_text("R:", RA_LABEL, TEXT, Alignment::Right, Baseline::Alphabetic)?;
        self.draw_text("D:", DEC_LABEL, TEXT, Alignment::Right, Baseline::Alphabetic)
    }

    fn draw_readout(&mut self, readout: Readout, text: &str) -> Result<(), D::Error> {
        self.target.fill_solid(&readout_region(readout), BACKGROUND)?;

        let (anchor, right) = readout_anchor(readout);
        let alignment = if right {
            Alignment::Right
        } else {
            Alignment::Left
        };
        self.draw_text(text, anchor, TEXT, alignment, Baseline::Alphabetic)
    }
}
