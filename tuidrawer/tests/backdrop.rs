use tuidrawer::{Backdrop, Rgb, Style};

fn channel_close(a: u8, b: u8) -> bool {
    (a as i16 - b as i16).abs() <= 2
}

#[test]
fn test_dim_zero_keeps_color() {
    let color = Rgb::new(120, 80, 200);
    let dimmed = color.dim(0.0);
    assert!(channel_close(dimmed.r, color.r));
    assert!(channel_close(dimmed.g, color.g));
    assert!(channel_close(dimmed.b, color.b));
}

#[test]
fn test_dim_full_is_black() {
    let dimmed = Rgb::new(200, 200, 200).dim(1.0);
    assert!(channel_close(dimmed.r, 0));
    assert!(channel_close(dimmed.g, 0));
    assert!(channel_close(dimmed.b, 0));
}

#[test]
fn test_dim_reduces_brightness() {
    let color = Rgb::new(180, 120, 60);
    let dimmed = color.dim(0.5);
    let brightness = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
    assert!(brightness(dimmed) < brightness(color));
}

#[test]
fn test_dim_clamps_amount() {
    // Out-of-range amounts clamp instead of overflowing
    let over = Rgb::new(100, 100, 100).dim(2.0);
    assert!(channel_close(over.r, 0));
    let under = Rgb::new(100, 100, 100).dim(-1.0);
    assert!(channel_close(under.r, 100));
}

#[test]
fn test_backdrop_apply() {
    let color = Rgb::new(90, 90, 90);
    assert_eq!(Backdrop::None.apply(color), color);

    let dimmed = Backdrop::Dim(0.5).apply(color);
    assert!(dimmed.r < color.r);
}

#[test]
fn test_style_builder() {
    let style = Style::new()
        .background(Rgb::new(1, 2, 3))
        .foreground(Rgb::new(4, 5, 6));
    assert_eq!(style.background, Some(Rgb::new(1, 2, 3)));
    assert_eq!(style.foreground, Some(Rgb::new(4, 5, 6)));
}
