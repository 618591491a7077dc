mod tests {
    use dodge_cube_light::transition::Fade;
    use embassy_time::{Duration, Instant};

    #[test]
    fn test_fade() {
        let mut fade = Fade::new(0);
        assert_eq!(fade.current(), 0);
        assert!(!fade.is_fading());
        fade.start(100, Duration::from_millis(100), Instant::from_millis(0));
        assert!(fade.is_fading());
        assert_eq!(fade.target(), 100);

        fade.tick(Instant::from_millis(50));
        assert_eq!(fade.current(), 50);

        fade.tick(Instant::from_millis(100));
        assert_eq!(fade.current(), 100);
        assert!(!fade.is_fading());
    }

    #[test]
    fn test_fade_down() {
        let mut fade = Fade::new(200);
        fade.start(0, Duration::from_millis(200), Instant::from_millis(1000));

        fade.tick(Instant::from_millis(1000));
        assert_eq!(fade.current(), 200);

        fade.tick(Instant::from_millis(1300));
        assert_eq!(fade.current(), 0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut fade = Fade::new(10);
        fade.start(240, Duration::from_millis(0), Instant::from_millis(5));
        assert_eq!(fade.current(), 240);
        assert!(!fade.is_fading());
    }
}
