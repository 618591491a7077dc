mod tests {
    use dodge_cube_light::{
        ColourMode, Command, CommandQueue, LightMode, QueueFull, Renderer, RendererConfig, Rgb,
        ValueNoise, XorShift,
    };

    fn renderer() -> Renderer<XorShift, ValueNoise> {
        Renderer::new(&RendererConfig::default(), XorShift::new(1), ValueNoise::new(1))
    }

    #[test]
    fn test_set_mode_round_trip() {
        let mut renderer = renderer();
        renderer.apply(Command::set_mode("chaser"));

        let status = renderer.status();
        assert_eq!(status.mode, LightMode::Chaser);
        assert_eq!(status.mode.as_str(), "chaser");
        assert!(status.power);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let mut renderer = renderer();
        renderer.apply(Command::set_mode("flame"));
        renderer.apply(Command::set_mode("disco"));

        assert_eq!(renderer.status().mode, LightMode::Static);
        assert_eq!(Command::set_mode(""), Command::SetMode(LightMode::Static));
    }

    #[test]
    fn test_set_colour_mode() {
        let mut renderer = renderer();
        renderer.apply(Command::set_colour_mode("noise_hue"));
        assert_eq!(renderer.status().colour_mode, ColourMode::NoiseHue);

        renderer.apply(Command::set_colour_mode("plaid"));
        assert_eq!(renderer.status().colour_mode, ColourMode::Static);
    }

    #[test]
    fn test_commands_are_idempotent() {
        let mut renderer = renderer();
        renderer.apply(Command::SetPower(false));
        let first = renderer.status();
        renderer.apply(Command::SetPower(false));
        assert_eq!(renderer.status(), first);
        assert!(!first.power);
    }

    #[test]
    fn test_static_colour_and_brightness() {
        let mut renderer = renderer();
        renderer.apply(Command::SetStaticColour(Rgb::new(1, 2, 3)));
        renderer.apply(Command::SetBrightness(200));

        let status = renderer.status();
        assert_eq!(status.static_colour, Rgb::new(1, 2, 3));
        assert_eq!(status.brightness, 200);
    }

    #[test]
    fn test_parse_colour() {
        assert_eq!(Command::parse_colour("16711680"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Command::parse_colour(" 65280 "), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Command::parse_colour("0"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(Command::parse_colour("16777216"), None);
        assert_eq!(Command::parse_colour("#ff0000"), None);
        assert_eq!(Command::parse_colour("-1"), None);
    }

    #[test]
    fn test_from_route() {
        assert_eq!(
            Command::from_route("set-mode", Some("flame")),
            Some(Command::SetMode(LightMode::Flame))
        );
        assert_eq!(
            Command::from_route("set-mode", Some("bogus")),
            Some(Command::SetMode(LightMode::Static))
        );
        assert_eq!(
            Command::from_route("set-colour-mode", Some("rainbow")),
            Some(Command::SetColourMode(ColourMode::Rainbow))
        );
        assert_eq!(
            Command::from_route("set-static-colour", Some("255")),
            Some(Command::SetStaticColour(Rgb::new(0, 0, 255)))
        );
        assert_eq!(
            Command::from_route("set-brightness", Some("40")),
            Some(Command::SetBrightness(40))
        );
        assert_eq!(Command::from_route("set-brightness", Some("300")), None);
        assert_eq!(Command::from_route("on", None), Some(Command::SetPower(true)));
        assert_eq!(Command::from_route("off", None), Some(Command::SetPower(false)));
        assert_eq!(Command::from_route("reboot", None), None);
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue: CommandQueue<4> = CommandQueue::new();
        assert!(queue.is_empty());
        queue.try_send(Command::SetPower(false)).unwrap();
        queue.try_send(Command::set_mode("twinkle")).unwrap();

        assert_eq!(queue.try_receive(), Some(Command::SetPower(false)));
        assert_eq!(
            queue.try_receive(),
            Some(Command::SetMode(LightMode::Twinkle))
        );
        assert_eq!(queue.try_receive(), None);
    }

    #[test]
    fn test_queue_full() {
        let queue: CommandQueue<2> = CommandQueue::new();
        queue.try_send(Command::BeginUpdate).unwrap();
        queue.try_send(Command::EndUpdate).unwrap();

        let rejected = Command::SetBrightness(1);
        assert_eq!(queue.try_send(rejected), Err(QueueFull(rejected)));
    }

    #[test]
    fn test_drain_applies_in_order() {
        let queue: CommandQueue<4> = CommandQueue::new();
        queue.try_send(Command::set_mode("flame")).unwrap();
        queue.try_send(Command::set_mode("up_wave")).unwrap();

        let mut renderer = renderer();
        renderer.drain(&queue);

        assert_eq!(renderer.status().mode, LightMode::UpWave);
        assert!(queue.is_empty());
    }
}
