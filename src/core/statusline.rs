use super::context::RenderContext;
use super::segments::{SegmentData, SeparatorSide};
use crate::config::{Align, Shell};
use crate::ui::themes::{SymbolTemplates, Theme};
use ansi_term::{Colour, Style};

pub struct StatusLineGenerator {
    align: Align,
    shell: Shell,
    theme: Theme,
    symbols: SymbolTemplates,
}

impl StatusLineGenerator {
    pub fn new(ctx: &RenderContext) -> Self {
        // 终端不支持右侧 prompt 时按左对齐渲染
        let align = if ctx.supports_right_modules() {
            ctx.config.align
        } else {
            Align::Left
        };

        Self {
            align,
            shell: ctx.config.shell,
            theme: ctx.theme.clone(),
            symbols: ctx.symbols.clone(),
        }
    }

    /// 主题按段名的覆盖优先于段自带颜色
    fn colors(&self, segment: &SegmentData) -> (u8, u8) {
        match self.theme.override_for(&segment.name) {
            Some(colors) => (colors.foreground, colors.background),
            None => (segment.foreground, segment.background),
        }
    }

    pub fn generate(&self, segments: &[SegmentData]) -> String {
        match self.align {
            Align::Left => self.generate_left(segments),
            Align::Right => self.generate_right(segments),
        }
    }

    fn generate_left(&self, segments: &[SegmentData]) -> String {
        let mut line = String::new();

        for (i, segment) in segments.iter().enumerate() {
            let (fg, bg) = self.colors(segment);
            line.push_str(&paint(self.shell, fg, Some(bg), &format!(" {} ", segment.content)));

            match &segment.separator {
                Some(sep) if sep.side == SeparatorSide::After => {
                    line.push_str(&paint(self.shell, sep.foreground, Some(bg), &sep.glyph));
                }
                _ => {
                    let next_bg = segments.get(i + 1).map(|next| self.colors(next).1);
                    line.push_str(&paint(self.shell, bg, next_bg, self.symbols.separator));
                }
            }
        }

        line
    }

    fn generate_right(&self, segments: &[SegmentData]) -> String {
        let mut line = String::new();

        for (i, segment) in segments.iter().enumerate() {
            let (fg, bg) = self.colors(segment);

            match &segment.separator {
                Some(sep) if sep.side == SeparatorSide::Before => {
                    line.push_str(&paint(self.shell, sep.foreground, Some(bg), &sep.glyph));
                }
                _ => {
                    let prev_bg = i
                        .checked_sub(1)
                        .and_then(|p| segments.get(p))
                        .map(|prev| self.colors(prev).1);
                    line.push_str(&paint(self.shell, bg, prev_bg, self.symbols.separator_reverse));
                }
            }

            line.push_str(&paint(self.shell, fg, Some(bg), &format!(" {} ", segment.content)));
        }

        line
    }
}

fn paint(shell: Shell, fg: u8, bg: Option<u8>, text: &str) -> String {
    let style = match bg {
        Some(bg) => Colour::Fixed(fg).on(Colour::Fixed(bg)),
        None => Style::new().fg(Colour::Fixed(fg)),
    };
    let (open, close) = shell.non_printing_delimiters();
    format!(
        "{open}{}{close}{text}{open}{}{close}",
        style.prefix(),
        style.suffix()
    )
}
