use glam::Vec3;
use motion_trail::core::{RibbonMesh, Sample, TrailComponent, TrailConfig};
use motion_trail::math::{AnimationCurve, Color, CurveRange, Gradient, GradientRange, Keyframe, WrapMode};
use motion_trail::traits::{ColorCurve, LineModel, ScalarCurve};
use motion_trail::TrailError;

/// Line model that records what it was asked to build
#[derive(Debug, Default)]
struct RecordingModel {
    capacity: usize,
    rebuilds: Vec<Vec<Sample>>,
    widths: Vec<Vec<f32>>,
    colors: Vec<Vec<Color>>,
    clears: usize,
}

impl LineModel for RecordingModel {
    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    fn rebuild(&mut self, samples: &[Sample], width: &dyn ScalarCurve, color: &dyn ColorCurve) {
        let n = samples.len();
        let t = |i: usize| if n <= 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
        self.rebuilds.push(samples.to_vec());
        self.widths.push((0..n).map(|i| width.evaluate(t(i))).collect());
        self.colors.push((0..n).map(|i| color.evaluate(t(i))).collect());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

fn recording_trail(config: TrailConfig) -> TrailComponent<RecordingModel> {
    let mut trail = TrailComponent::from_factory(&mut RecordingModel::default, config);
    trail.enable();
    trail
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_factory_sets_model_capacity() {
        let config = TrailConfig::default().with_capacity(32).unwrap();
        let trail = TrailComponent::from_factory(&mut RecordingModel::default, config);
        assert_eq!(trail.model().capacity, 32);
        assert!(!trail.is_enabled());
    }

    #[test]
    fn test_factory_can_be_any_closure() {
        let mut created = 0;
        let mut factory = || {
            created += 1;
            RibbonMesh::with_capacity(8)
        };
        let trail = TrailComponent::from_factory(&mut factory, TrailConfig::default());
        assert_eq!(created, 1);
        assert_eq!(trail.model().capacity(), 100);
    }

    #[test]
    fn test_rebuild_only_on_changed_frames() {
        let mut trail = recording_trail(TrailConfig::new(5.0, 1.0).unwrap());
        let initial = trail.model().rebuilds.len();

        trail.update(Vec3::ZERO, 0.0);
        trail.update(Vec3::new(0.0, 2.0, 0.0), 1.0);
        for t in 2..5 {
            trail.update(Vec3::new(0.0, 2.0, 0.0), t as f64);
        }

        assert_eq!(trail.model().rebuilds.len() - initial, 2);
    }

    #[test]
    fn test_geometry_matches_buffer_in_same_frame() {
        let mut trail = recording_trail(TrailConfig::new(5.0, 1.0).unwrap());
        trail.update(Vec3::ZERO, 0.0);
        trail.update(Vec3::new(3.0, 0.0, 0.0), 0.5);

        let last = trail.model().rebuilds.last().unwrap();
        assert_eq!(*last, trail.snapshot());
    }

    #[test]
    fn test_expiry_alone_triggers_rebuild() {
        let mut trail = recording_trail(TrailConfig::new(1.0, 1.0).unwrap());
        trail.update(Vec3::ZERO, 0.0);
        trail.update(Vec3::new(2.0, 0.0, 0.0), 0.5);
        let before = trail.model().rebuilds.len();

        let result = trail.update(Vec3::new(2.0, 0.0, 0.0), 1.2);
        assert_eq!(result.expired, 1);
        assert!(!result.inserted);
        assert_eq!(trail.model().rebuilds.len(), before + 1);
        assert_eq!(trail.model().rebuilds.last().unwrap().len(), 1);
    }

    #[test]
    fn test_disable_drops_samples_and_clears_model() {
        let mut trail = recording_trail(TrailConfig::default());
        trail.update(Vec3::ZERO, 0.0);
        trail.update(Vec3::new(5.0, 0.0, 0.0), 1.0);

        trail.disable();
        assert!(trail.sampler().is_empty());
        assert_eq!(trail.model().clears, 1);

        // Nothing survives a disable/enable cycle
        trail.enable();
        let result = trail.update(Vec3::new(5.0, 0.0, 0.0), 2.0);
        assert!(result.inserted);
        assert_eq!(trail.snapshot(), vec![Sample::new(Vec3::new(5.0, 0.0, 0.0), 2.0)]);
    }

    #[test]
    fn test_epoch_clock_rebuilds_every_moving_frame() {
        let mut trail = recording_trail(TrailConfig::new(5.0, 0.01).unwrap());
        let initial = trail.model().rebuilds.len();
        let start = 1.7e9;

        for i in 0..60 {
            let result = trail.update(Vec3::new(i as f32, 0.0, 0.0), start + i as f64 / 60.0);
            assert!(result.inserted, "frame {i} was dropped");
        }
        assert_eq!(trail.model().rebuilds.len() - initial, 60);
        assert_eq!(trail.snapshot().len(), 60);
    }

    #[test]
    fn test_setters_validate() {
        let mut trail = recording_trail(TrailConfig::default());
        assert_eq!(trail.set_min_distance(-0.5), Err(TrailError::InvalidMinDistance(-0.5)));
        assert_eq!(trail.set_capacity(0), Err(TrailError::ZeroCapacity));
        assert!(trail.set_lifetime(f64::NAN).is_err());

        trail.set_min_distance(2.0).unwrap();
        assert_eq!(trail.config().min_distance_sq(), 4.0);

        trail.set_capacity(16).unwrap();
        assert_eq!(trail.model().capacity, 16);
    }
}

#[cfg(test)]
mod curve_tests {
    use super::*;

    fn three_point_trail() -> TrailComponent<RecordingModel> {
        let mut trail = recording_trail(TrailConfig::new(10.0, 0.5).unwrap());
        for i in 0..3 {
            trail.update(Vec3::new(i as f32, 0.0, 0.0), i as f64);
        }
        trail
    }

    #[test]
    fn test_curves_evaluate_head_at_zero_tail_at_one() {
        let mut trail = three_point_trail();
        trail.set_width(CurveRange::curve(AnimationCurve::linear(0.0, 1.0), 4.0));

        let widths = trail.model().widths.last().unwrap();
        // Index 0 is the newest sample
        assert_eq!(widths, &vec![0.0, 2.0, 4.0]);
        assert_eq!(trail.model().rebuilds.last().unwrap()[0].timestamp, 2.0);
    }

    #[test]
    fn test_single_sample_evaluates_at_head() {
        let mut trail = recording_trail(TrailConfig::default());
        trail.set_width(CurveRange::curve(AnimationCurve::linear(3.0, 1.0), 1.0));
        trail.update(Vec3::ZERO, 0.0);
        assert_eq!(trail.model().widths.last().unwrap(), &vec![3.0]);
    }

    #[test]
    fn test_set_width_forces_clamp_and_rebuilds() {
        let mut trail = three_point_trail();
        let before = trail.model().rebuilds.len();

        let looping = AnimationCurve::new(vec![Keyframe::new(0.0, 1.0), Keyframe::new(0.5, 2.0)])
            .unwrap()
            .with_wrap(WrapMode::Loop, WrapMode::PingPong);
        trail.set_width(CurveRange::curve(looping, 1.0));

        assert_eq!(trail.model().rebuilds.len(), before + 1);
        match trail.width() {
            CurveRange::Curve { curve, .. } => {
                assert_eq!(curve.pre_wrap, WrapMode::Clamp);
                assert_eq!(curve.post_wrap, WrapMode::Clamp);
            }
            other => panic!("unexpected width {other:?}"),
        }
        // Tail at t=1 is past the last key and holds its value
        assert_eq!(trail.model().widths.last().unwrap()[2], 2.0);
    }

    #[test]
    fn test_two_curve_width_uses_max_end_and_clamps() {
        let mut trail = three_point_trail();
        let min = AnimationCurve::linear(0.0, 0.0).with_wrap(WrapMode::Loop, WrapMode::Loop);
        let max = AnimationCurve::new(vec![Keyframe::new(0.0, 2.0), Keyframe::new(0.5, 4.0)])
            .unwrap()
            .with_wrap(WrapMode::PingPong, WrapMode::PingPong);
        trail.set_width(CurveRange::TwoCurves { min, max, multiplier: 0.5 });

        match trail.width() {
            CurveRange::TwoCurves { min, max, .. } => {
                assert_eq!(min.post_wrap, WrapMode::Clamp);
                assert_eq!(max.post_wrap, WrapMode::Clamp);
            }
            other => panic!("unexpected width {other:?}"),
        }
        assert_eq!(trail.model().widths.last().unwrap(), &vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_two_color_range_uses_max_end() {
        let mut trail = three_point_trail();
        trail.set_color(GradientRange::TwoColors {
            min: Color::BLACK,
            max: Color::rgb(0.0, 1.0, 0.0),
        });
        let colors = trail.model().colors.last().unwrap();
        assert!(colors.iter().all(|c| *c == Color::rgb(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_set_color_rebuilds_with_gradient() {
        let mut trail = three_point_trail();
        trail.set_color(GradientRange::Gradient(Gradient::fade(
            Color::WHITE,
            Color::WHITE.with_alpha(0.0),
        )));

        let alphas: Vec<f32> = trail.model().colors.last().unwrap().iter().map(|c| c.a).collect();
        assert_eq!(alphas, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_curve_change_leaves_samples_alone() {
        let mut trail = three_point_trail();
        let before = trail.snapshot();
        trail.set_width(CurveRange::Constant(9.0));
        trail.set_color(GradientRange::Color(Color::BLACK));
        assert_eq!(trail.snapshot(), before);
    }
}

#[cfg(test)]
mod ribbon_tests {
    use super::*;

    #[test]
    fn test_ribbon_follows_trail() {
        let mut trail = TrailComponent::from_factory(&mut RibbonMesh::new, TrailConfig::new(2.0, 0.5).unwrap());
        trail.set_width(CurveRange::curve(AnimationCurve::linear(1.0, 0.0), 0.5));
        trail.enable();

        for i in 0..10 {
            trail.update(Vec3::new(i as f32, 0.0, 0.0), i as f64 * 0.5);
        }

        // Lifetime 2s at 0.5s spacing keeps five samples
        let mesh = trail.model();
        assert_eq!(trail.sampler().len(), 5);
        assert_eq!(mesh.point_count(), 5);
        assert_eq!(mesh.indices().len(), 4 * 6);
        assert_eq!(mesh.vertices()[0].width, 0.5);
        assert_eq!(mesh.vertices()[8].width, 0.0);
        assert_eq!(mesh.vertices()[0].position, [9.0, 0.0, 0.0]);
    }

    #[test]
    fn test_ribbon_cleared_on_disable() {
        let mut trail = TrailComponent::from_factory(&mut RibbonMesh::new, TrailConfig::default());
        trail.enable();
        trail.update(Vec3::ZERO, 0.0);
        trail.update(Vec3::new(0.0, 3.0, 0.0), 1.0);
        assert_eq!(trail.model().point_count(), 2);

        trail.disable();
        assert!(trail.model().vertices().is_empty());
        assert!(trail.model().indices().is_empty());
    }
}
