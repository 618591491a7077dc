mod tests {
    use dodge_cube_light::{
        FrameBuffer, Rgb, XorShift,
        color::BLACK,
        effect::{ChaserConfig, ChaserEffect, Effect, Particle, ParticleSeed, Tick},
        graph::{Direction, FORWARD},
        noise::ValueNoise,
        random::RandomSource,
        topology::{LED_COUNT, edge, last_led},
    };
    use embassy_time::{Duration, Instant};

    /// Replays a fixed list of outcomes, taken modulo the requested bound
    struct Scripted {
        values: Vec<u32>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, bound: u32) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            if bound == 0 { 0 } else { value % bound }
        }
    }

    fn seed(start_led: usize, direction: Direction) -> ParticleSeed {
        ParticleSeed {
            colour: Rgb::new(255, 0, 0),
            speed: Duration::from_millis(40),
            decay: 160,
            start_led,
            direction,
        }
    }

    #[test]
    fn test_moves_inside_edge() {
        let mut particle = Particle::new(&seed(3, Direction::Forward));
        let mut random = Scripted::new(&[0]);
        assert_eq!(particle.advance(Instant::from_millis(41), &mut random), Some(4));

        let mut particle = Particle::new(&seed(3, Direction::Backward));
        assert_eq!(particle.advance(Instant::from_millis(41), &mut random), Some(2));
    }

    #[test]
    fn test_waits_for_its_interval() {
        let mut particle = Particle::new(&seed(0, Direction::Forward));
        let mut random = Scripted::new(&[0]);

        assert_eq!(particle.advance(Instant::from_millis(40), &mut random), None);
        assert_eq!(particle.led(), 0);
        assert_eq!(particle.advance(Instant::from_millis(41), &mut random), Some(1));
        assert_eq!(particle.advance(Instant::from_millis(81), &mut random), None);
        assert_eq!(particle.advance(Instant::from_millis(82), &mut random), Some(2));
    }

    #[test]
    fn test_crossing_from_edge_zero() {
        let mut particle = Particle::new(&seed(last_led(0), Direction::Forward));
        let mut random = Scripted::new(&[1]);

        let led = particle.advance(Instant::from_millis(41), &mut random);
        assert_eq!(led, Some(last_led(12)));
        assert!(FORWARD[0].contains(edge(particle.led())));
        assert_eq!(particle.direction(), Direction::Backward);
    }

    #[test]
    fn test_branch_choices() {
        let mut random = Scripted::new(&[0]);
        let mut particle = Particle::new(&seed(last_led(1), Direction::Forward));
        particle.advance(Instant::from_millis(41), &mut random);
        assert_eq!(particle.led(), 14);
        assert_eq!(particle.direction(), Direction::Forward);

        let mut random = Scripted::new(&[1]);
        let mut particle = Particle::new(&seed(last_led(1), Direction::Forward));
        particle.advance(Instant::from_millis(41), &mut random);
        assert_eq!(particle.led(), 125);
        assert_eq!(particle.direction(), Direction::Backward);
    }

    #[test]
    fn test_pass_through_consumes_no_randomness() {
        let mut random = Scripted::new(&[0, 1]);
        let mut particle = Particle::new(&seed(last_led(0), Direction::Forward));
        particle.advance(Instant::from_millis(41), &mut random);
        assert_eq!(random.next, 0);
    }

    #[test]
    fn test_start_position_wraps() {
        let particle = Particle::new(&seed(LED_COUNT + 5, Direction::Forward));
        assert_eq!(particle.led(), 5);
    }

    #[test]
    fn test_random_walk_stays_on_strip() {
        let mut random = XorShift::new(7);
        let mut particles: Vec<Particle> = (0..LED_COUNT)
            .step_by(13)
            .map(|led| {
                let direction = if led % 2 == 0 {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                Particle::new(&seed(led, direction))
            })
            .collect();

        for step in 1..5_000u64 {
            let now = Instant::from_millis(step * 41);
            for particle in &mut particles {
                let before = particle.led();
                let after = particle
                    .advance(now, &mut random)
                    .expect("interval elapsed");
                assert!(after < LED_COUNT);
                assert_ne!(before, after);
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = ChaserConfig::default();
        assert_eq!(config.particles.len(), 6);
        let chaser = ChaserEffect::new(&config);
        assert_eq!(chaser.particles().len(), 6);
    }

    #[test]
    fn test_trails_add_up() {
        let mut seeds = heapless::Vec::new();
        for colour in [Rgb::new(200, 0, 0), Rgb::new(100, 10, 0)] {
            let mut particle = seed(0, Direction::Forward);
            particle.colour = colour;
            seeds.push(particle).expect("capacity");
        }
        let mut chaser = ChaserEffect::new(&ChaserConfig { particles: seeds });

        let mut random = Scripted::new(&[0]);
        let noise = ValueNoise::new(0);
        let mut leds: FrameBuffer = [BLACK; LED_COUNT];
        let mut tick = Tick {
            now: Instant::from_millis(41),
            colour: BLACK,
            random: &mut random,
            noise: &noise,
        };
        chaser.render(&mut tick, &mut leds);

        assert_eq!(leds[1], Rgb::new(255, 10, 0));
        assert_eq!(leds[0], BLACK);
        assert!(leds[2..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_trail_fades() {
        let mut seeds = heapless::Vec::new();
        seeds.push(seed(0, Direction::Forward)).expect("capacity");
        let mut chaser = ChaserEffect::new(&ChaserConfig { particles: seeds });

        let mut random = Scripted::new(&[0]);
        let noise = ValueNoise::new(0);
        let mut leds: FrameBuffer = [BLACK; LED_COUNT];

        for now in [41, 82] {
            let mut tick = Tick {
                now: Instant::from_millis(now),
                colour: BLACK,
                random: &mut random,
                noise: &noise,
            };
            chaser.render(&mut tick, &mut leds);
        }

        // Head on LED 2, the LED it left is faded then decayed
        assert_eq!(leds[2], Rgb::new(255, 0, 0));
        // 255 * 225 / 256 = 224, then 224 * 161 / 256 = 140
        assert_eq!(leds[1], Rgb::new(140, 0, 0));
    }
}
