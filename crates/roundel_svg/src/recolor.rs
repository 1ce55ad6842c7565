//! Fill and stroke color overrides
//!
//! Overrides never touch the loaded document. A `WorkingCopy` holds recolored
//! commands for one set of overrides and is re-derived from the pristine
//! commands whenever the overrides change.

use roundel_core::{Brush, Color};

use crate::document::{SvgDocument, SvgDrawCommand};

/// Replacement colors for every fill and every stroke of an icon
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorOverrides {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

impl ColorOverrides {
    pub fn new(fill: Option<Color>, stroke: Option<Color>) -> Self {
        Self { fill, stroke }
    }

    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

/// Recolor existing paints; paths without a fill or stroke stay without one
pub fn recolor(commands: &[SvgDrawCommand], overrides: &ColorOverrides) -> Vec<SvgDrawCommand> {
    let replace = |color: Color, opacity: f32| Brush::Solid(color.with_alpha(color.a * opacity));

    commands
        .iter()
        .map(|command| match (command, overrides.fill, overrides.stroke) {
            (
                SvgDrawCommand::FillPath {
                    path,
                    rule,
                    opacity,
                    ..
                },
                Some(fill),
                _,
            ) => SvgDrawCommand::FillPath {
                path: path.clone(),
                brush: replace(fill, *opacity),
                rule: *rule,
                opacity: *opacity,
            },
            (
                SvgDrawCommand::StrokePath {
                    path,
                    stroke,
                    opacity,
                    ..
                },
                _,
                Some(color),
            ) => SvgDrawCommand::StrokePath {
                path: path.clone(),
                stroke: stroke.clone(),
                brush: replace(color, *opacity),
                opacity: *opacity,
            },
            (other, _, _) => other.clone(),
        })
        .collect()
}

/// Recolored commands for one set of overrides
#[derive(Clone, Debug)]
pub struct WorkingCopy {
    overrides: ColorOverrides,
    commands: Vec<SvgDrawCommand>,
}

impl WorkingCopy {
    pub fn derive(document: &SvgDocument, overrides: ColorOverrides) -> Self {
        Self {
            overrides,
            commands: recolor(document.commands(), &overrides),
        }
    }

    pub fn overrides(&self) -> &ColorOverrides {
        &self.overrides
    }

    pub fn commands(&self) -> &[SvgDrawCommand] {
        &self.commands
    }
}
