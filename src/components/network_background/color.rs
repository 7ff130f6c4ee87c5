/// Channels used for trails whose base colour cannot be parsed.
const FALLBACK_CHANNELS: (u8, u8, u8) = (148, 163, 184);

/// Extract the red, green, and blue channels from `rgb(..)`, `rgba(..)`, or
/// `#rrggbb` colour strings.
pub fn parse_channels(color: &str) -> Option<(u8, u8, u8)> {
	let color = color.trim();
	if let Some(hex) = color.strip_prefix('#') {
		return parse_hex(hex);
	}

	let body = color
		.strip_prefix("rgba(")
		.or_else(|| color.strip_prefix("rgb("))?
		.strip_suffix(')')?;
	let mut channels = body.split(',').map(|c| c.trim().parse::<u8>().ok());
	let r = channels.next()??;
	let g = channels.next()??;
	let b = channels.next()??;
	Some((r, g, b))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
	if hex.len() != 6 || !hex.is_ascii() {
		return None;
	}
	let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
	Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Re-express `color` with the given opacity, falling back to a neutral
/// slate when the base colour is not understood.
pub fn with_alpha(color: &str, alpha: f64) -> String {
	let (r, g, b) = parse_channels(color).unwrap_or(FALLBACK_CHANNELS);
	format!("rgba({r}, {g}, {b}, {:.3})", alpha.clamp(0.0, 1.0))
}
