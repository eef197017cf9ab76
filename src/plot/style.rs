use std::{fmt, io::ErrorKind, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Color {
    #[default]
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl Color {
    fn from_code(c: char) -> Option<Self> {
        Some(match c {
            'b' => Self::Blue,
            'g' => Self::Green,
            'r' => Self::Red,
            'c' => Self::Cyan,
            'm' => Self::Magenta,
            'y' => Self::Yellow,
            'k' => Self::Black,
            'w' => Self::White,
            _ => return None,
        })
    }

    pub fn code(&self) -> char {
        match self {
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Cyan => 'c',
            Self::Magenta => 'm',
            Self::Yellow => 'y',
            Self::Black => 'k',
            Self::White => 'w',
        }
    }

    pub fn rgb(&self) -> &'static str {
        match self {
            Self::Blue => "#0000ff",
            Self::Green => "#008000",
            Self::Red => "#ff0000",
            Self::Cyan => "#00bfbf",
            Self::Magenta => "#bf00bf",
            Self::Yellow => "#bfbf00",
            Self::Black => "#000000",
            Self::White => "#ffffff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Dash {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl Dash {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Solid => "-",
            Self::Dashed => "--",
            Self::DashDot => "-.",
            Self::Dotted => ":",
        }
    }

    /// Dash pattern in multiples of the line width; `None` for solid lines.
    pub fn pattern(&self) -> Option<&'static [f64]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(&[3.7, 1.6]),
            Self::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
            Self::Dotted => Some(&[1.0, 1.65]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Marker {
    Point,
    Circle,
    Cross,
    Plus,
    Square,
    Star,
    Diamond,
}

impl Marker {
    fn from_code(c: char) -> Option<Self> {
        Some(match c {
            '.' => Self::Point,
            'o' => Self::Circle,
            'x' => Self::Cross,
            '+' => Self::Plus,
            's' => Self::Square,
            '*' => Self::Star,
            'd' => Self::Diamond,
            _ => return None,
        })
    }

    pub fn code(&self) -> char {
        match self {
            Self::Point => '.',
            Self::Circle => 'o',
            Self::Cross => 'x',
            Self::Plus => '+',
            Self::Square => 's',
            Self::Star => '*',
            Self::Diamond => 'd',
        }
    }
}

/// A matplotlib-style format string such as `"r:x"` (red, dotted line,
/// cross markers) or `":k"` (black dotted line).
///
/// Without a line style but with a marker, only markers are drawn. An empty
/// format draws a solid blue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub color: Color,
    pub dash: Option<Dash>,
    pub marker: Option<Marker>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            dash: Some(Dash::Solid),
            marker: None,
        }
    }
}

fn style_error(fmt: &str, info: &str) -> std::io::Error {
    std::io::Error::new(
        ErrorKind::InvalidInput,
        format!("Invalid line style '{fmt}': {info}"),
    )
}

impl FromStr for LineStyle {
    type Err = std::io::Error;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        let mut color = None;
        let mut dash = None;
        let mut marker = None;

        let mut chars = fmt.chars().peekable();
        while let Some(c) = chars.next() {
            let parsed_dash = match (c, chars.peek()) {
                ('-', Some(&'-')) => Some(Dash::Dashed),
                ('-', Some(&'.')) => Some(Dash::DashDot),
                ('-', _) => Some(Dash::Solid),
                (':', _) => Some(Dash::Dotted),
                _ => None,
            };

            if let Some(d) = parsed_dash {
                if matches!(d, Dash::Dashed | Dash::DashDot) {
                    chars.next();
                }
                if dash.replace(d).is_some() {
                    return Err(style_error(fmt, "two line styles"));
                }
            } else if let Some(m) = Marker::from_code(c) {
                if marker.replace(m).is_some() {
                    return Err(style_error(fmt, "two markers"));
                }
            } else if let Some(col) = Color::from_code(c) {
                if color.replace(col).is_some() {
                    return Err(style_error(fmt, "two colors"));
                }
            } else {
                return Err(style_error(fmt, &format!("unrecognized character '{c}'")));
            }
        }

        if dash.is_none() && marker.is_none() {
            dash = Some(Dash::Solid);
        }

        Ok(Self {
            color: color.unwrap_or_default(),
            dash,
            marker,
        })
    }
}

impl fmt::Display for LineStyle {
    // marker first: "-." followed by a '.' marker would read back as dash-dot
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(marker) = self.marker {
            write!(f, "{}", marker.code())?;
        }
        if let Some(dash) = self.dash {
            write!(f, "{}", dash.code())?;
        }
        write!(f, "{}", self.color.code())
    }
}
