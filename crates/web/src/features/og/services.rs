use serde::Deserialize;
use utoipa::IntoParams;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

const BACKGROUND: &str = "#0A0A0F";
const TEXT: &str = "#F0EDE6";
const MUTED: &str = "#6B6B7B";
const GOLD: &str = "#D4A843";
const GLOW: &str = "#E31B23";

/// Query parameters of the share card. Every field has a default.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OgParams {
    /// `no` renders a "not beat" card, anything else a "beat" card
    #[serde(default = "default_vote")]
    pub vote: String,
    #[serde(default = "default_streak")]
    pub streak: String,
    #[serde(default = "default_opponent")]
    pub opponent: String,
    /// Share of fans agreeing, in percent
    #[serde(default = "default_pct", alias = "percentage")]
    pub pct: String,
}

fn default_vote() -> String {
    "yes".to_string()
}

fn default_streak() -> String {
    "0".to_string()
}

fn default_opponent() -> String {
    "their next opponent".to_string()
}

fn default_pct() -> String {
    "50".to_string()
}

impl Default for OgParams {
    fn default() -> Self {
        Self {
            vote: default_vote(),
            streak: default_streak(),
            opponent: default_opponent(),
            pct: default_pct(),
        }
    }
}

impl OgParams {
    pub fn voted_yes(&self) -> bool {
        self.vote != "no"
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render the share card as a fixed-size SVG document.
pub fn render_card(params: &OgParams) -> String {
    let (verdict, verb) = if params.voted_yes() {
        ("YES", "beat")
    } else {
        ("NO", "not beat")
    };

    let lines = [
        (150, 24, MUTED, "letter-spacing=\"5\"", "UNBEATEN STREAK".to_string()),
        (290, 120, TEXT, "font-weight=\"900\"", escape(&params.streak)),
        (345, 24, MUTED, "letter-spacing=\"5\"", "MATCHES".to_string()),
        (420, 28, GOLD, "", format!("I voted {} &#8212;", verdict)),
        (
            465,
            28,
            TEXT,
            "",
            format!("United will {} {}", verb, escape(&params.opponent)),
        ),
        (
            530,
            22,
            MUTED,
            "",
            format!("{}% of fans agree", escape(&params.pct)),
        ),
    ];

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs><radialGradient id="haze" cx="50%" cy="30%" r="70%"><stop offset="0%" stop-color="{glow}" stop-opacity="0.08"/><stop offset="100%" stop-color="{glow}" stop-opacity="0"/></radialGradient></defs>
<rect width="100%" height="100%" fill="{bg}"/>
<rect width="100%" height="100%" fill="url(#haze)"/>
"#,
        w = WIDTH,
        h = HEIGHT,
        glow = GLOW,
        bg = BACKGROUND,
    );

    for (y, size, fill, extra, text) in lines {
        svg.push_str(&format!(
            "<text x=\"50%\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" {}>{}</text>\n",
            y, size, fill, extra, text
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let svg = render_card(&OgParams::default());

        assert!(svg.contains("width=\"1200\" height=\"630\""));
        assert!(svg.contains(">0</text>"));
        assert!(svg.contains("I voted YES"));
        assert!(svg.contains("United will beat their next opponent"));
        assert!(svg.contains("50% of fans agree"));
    }

    #[test]
    fn test_no_vote() {
        let params = OgParams {
            vote: "no".to_string(),
            streak: "12".to_string(),
            opponent: "Arsenal".to_string(),
            pct: "38".to_string(),
        };
        let svg = render_card(&params);

        assert!(svg.contains("I voted NO"));
        assert!(svg.contains("United will not beat Arsenal"));
        assert!(svg.contains(">12</text>"));
        assert!(svg.contains("38% of fans agree"));
    }

    #[test]
    fn test_text_is_escaped() {
        let params = OgParams {
            opponent: "<script>&\"".to_string(),
            ..OgParams::default()
        };
        let svg = render_card(&params);

        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;&amp;&quot;"));
    }
}
