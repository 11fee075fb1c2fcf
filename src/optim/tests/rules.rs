/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 四种更新规则的单轮行为测试
 */

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{assert_theta_eq, line_data, noisy_data};
use crate::errors::OptimError;
use crate::optim::{
    BatchUpdate, MiniBatchUpdate, MomentumUpdate, StochasticUpdate, UpdateRule, UpdateRuleEnum,
};

#[test]
fn test_batch_single_update() {
    // g = [-4, -8.5]，θ = 0 - 0.1·g = [0.4, 0.85]
    let data = line_data();
    let mut theta = data.zero_theta();
    BatchUpdate.update(data.design(), data.target(), &mut theta, 0.1);
    assert_abs_diff_eq!(theta[[0, 0]], 0.4, epsilon = 1e-6);
    assert_abs_diff_eq!(theta[[1, 0]], 0.85, epsilon = 1e-6);
}

#[test]
fn test_stochastic_single_epoch_in_index_order() {
    // 逐样本手算（α = 0.1）：
    // i=0: θ = [0.1, 0]
    // i=1: r = 0.1 - 3 = -2.9，θ = [0.39, 0.29]
    // i=2: r = 0.97 - 5 = -4.03，θ = [0.793, 1.096]
    // i=3: r = 4.081 - 7 = -2.919，θ = [1.0849, 1.9717]
    let data = line_data();
    let mut theta = data.zero_theta();
    StochasticUpdate.update(data.design(), data.target(), &mut theta, 0.1);
    assert_abs_diff_eq!(theta[[0, 0]], 1.0849, epsilon = 1e-4);
    assert_abs_diff_eq!(theta[[1, 0]], 1.9717, epsilon = 1e-4);
}

#[test]
fn test_stochastic_is_deterministic() {
    let data = noisy_data();
    let mut a = data.zero_theta();
    let mut b = data.zero_theta();
    for _ in 0..5 {
        StochasticUpdate.update(data.design(), data.target(), &mut a, 0.05);
        StochasticUpdate.update(data.design(), data.target(), &mut b, 0.05);
    }
    assert_eq!(a, b);
}

#[test]
fn test_mini_batch_visits_every_sample_once() {
    let mut rule = MiniBatchUpdate::new(2, Some(3));
    for _ in 0..10 {
        let batches = rule.epoch_batches(5);
        let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        let mut seen: Vec<usize> = batches.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}

#[test]
fn test_mini_batch_same_rng_same_result() {
    let data = noisy_data();
    let mut a = MiniBatchUpdate::with_rng(2, StdRng::seed_from_u64(11));
    let mut b = MiniBatchUpdate::with_rng(2, StdRng::seed_from_u64(11));
    let mut theta_a = data.zero_theta();
    let mut theta_b = data.zero_theta();
    for _ in 0..5 {
        a.update(data.design(), data.target(), &mut theta_a, 0.1);
        b.update(data.design(), data.target(), &mut theta_b, 0.1);
    }
    assert_eq!(theta_a, theta_b);
}

#[test]
fn test_mini_batch_full_size_matches_batch() {
    // batch_size = m 时，打乱只改变求和顺序
    let data = noisy_data();
    let mut rule = MiniBatchUpdate::new(data.samples(), Some(5));
    let mut theta_mini = data.zero_theta();
    let mut theta_batch = data.zero_theta();
    for _ in 0..20 {
        rule.update(data.design(), data.target(), &mut theta_mini, 0.1);
        BatchUpdate.update(data.design(), data.target(), &mut theta_batch, 0.1);
        assert_theta_eq(&theta_mini, &theta_batch, 1e-5);
    }
}

#[test]
fn test_mini_batch_validate() {
    assert!(MiniBatchUpdate::new(5, None).validate(5).is_ok());
    assert!(MiniBatchUpdate::new(1, None).validate(5).is_ok());
    assert!(matches!(
        MiniBatchUpdate::new(0, None).validate(5),
        Err(OptimError::InvalidHyperparameter { .. })
    ));
    assert!(matches!(
        MiniBatchUpdate::new(6, None).validate(5),
        Err(OptimError::InvalidHyperparameter { .. })
    ));
}

#[test]
fn test_momentum_zero_beta_matches_batch_exactly() {
    let data = noisy_data();
    let mut momentum = MomentumUpdate::new(0.0);
    momentum.reset((data.params(), 1));
    let mut theta_momentum = data.zero_theta();
    let mut theta_batch = data.zero_theta();
    for _ in 0..30 {
        momentum.update(data.design(), data.target(), &mut theta_momentum, 0.1);
        BatchUpdate.update(data.design(), data.target(), &mut theta_batch, 0.1);
        assert_eq!(theta_momentum, theta_batch);
    }
}

#[test]
fn test_momentum_velocity_accumulates() {
    // 第1步：v = α·g₀ = [-0.4, -0.85]，θ = [0.4, 0.85]
    // 第2步：g₁ = 1/4·Xᵀ(Xθ - y)，v = 0.9·v + 0.1·g₁
    let data = line_data();
    let mut rule = MomentumUpdate::new(0.9);
    rule.reset((2, 1));
    let mut theta = data.zero_theta();

    rule.update(data.design(), data.target(), &mut theta, 0.1);
    assert_abs_diff_eq!(rule.velocity()[[0, 0]], -0.4, epsilon = 1e-6);
    assert_abs_diff_eq!(rule.velocity()[[1, 0]], -0.85, epsilon = 1e-6);

    // 残差 Xθ - y = [0.4-1, 1.25-3, 2.1-5, 2.95-7] = [-0.6, -1.75, -2.9, -4.05]
    // g₁ = [-9.3/4, -(1.75+5.8+12.15)/4] = [-2.325, -4.925]
    rule.update(data.design(), data.target(), &mut theta, 0.1);
    assert_abs_diff_eq!(rule.velocity()[[0, 0]], 0.9 * -0.4 + 0.1 * -2.325, epsilon = 1e-5);
    assert_abs_diff_eq!(rule.velocity()[[1, 0]], 0.9 * -0.85 + 0.1 * -4.925, epsilon = 1e-5);
    assert_abs_diff_eq!(theta[[0, 0]], 0.4 + 0.5925, epsilon = 1e-5);
    assert_abs_diff_eq!(theta[[1, 0]], 0.85 + 1.2575, epsilon = 1e-5);

    rule.reset((2, 1));
    assert_eq!(rule.velocity(), &Array2::<f32>::zeros((2, 1)));
}

#[test]
fn test_momentum_validate() {
    assert!(MomentumUpdate::new(0.0).validate(4).is_ok());
    assert!(MomentumUpdate::new(0.99).validate(4).is_ok());
    assert!(MomentumUpdate::new(1.0).validate(4).is_err());
    assert!(MomentumUpdate::new(-0.1).validate(4).is_err());
    assert!(matches!(
        MomentumUpdate::new(f32::NAN).validate(4),
        Err(OptimError::NonFiniteHyperparameter { .. })
    ));
}

#[test]
fn test_rule_enum_dispatch() {
    let rules: Vec<UpdateRuleEnum> = vec![
        BatchUpdate.into(),
        StochasticUpdate.into(),
        MiniBatchUpdate::new(2, Some(1)).into(),
        MomentumUpdate::new(0.9).into(),
    ];
    let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        vec!["Batch GD", "Stochastic GD", "Mini-Batch GD", "Momentum GD"]
    );
}
