//! SIMD-accelerated kernels for the elementwise rectifier maps.
//!
//! This module provides optimized implementations using platform-specific SIMD
//! instructions (AVX2 on x86_64, NEON on ARM), with scalar fallbacks.

#![allow(dead_code, unreachable_code)]

/// Check if AVX2 is available (x86_64 only).
#[cfg(target_arch = "x86_64")]
pub fn has_avx2() -> bool {
    is_x86_feature_detected!("avx2")
}

#[cfg(not(target_arch = "x86_64"))]
pub fn has_avx2() -> bool {
    false
}

/// Check if NEON is available (ARM only).
#[cfg(target_arch = "aarch64")]
pub fn has_neon() -> bool {
    // NEON is mandatory on aarch64
    true
}

#[cfg(not(target_arch = "aarch64"))]
pub fn has_neon() -> bool {
    false
}

// === SIMD-accelerated element-wise operations ===

/// SIMD-accelerated rectifier: out = max(x, 0)
pub fn max0_f32(x: &[f32], out: &mut [f32]) {
    #[cfg(target_arch = "x86_64")]
    {
        if has_avx2() {
            // SAFETY: We've checked AVX2 is available
            unsafe { max0_f32_avx2(x, out) };
            return;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // SAFETY: NEON is mandatory on aarch64
        unsafe { max0_f32_neon(x, out) };
        return;
    }

    // Scalar fallback
    max0_f32_scalar(x, out);
}

/// SIMD-accelerated positivity mask: out = 1.0 where x > 0, else 0.0
pub fn step_f32(x: &[f32], out: &mut [f32]) {
    #[cfg(target_arch = "x86_64")]
    {
        if has_avx2() {
            unsafe { step_f32_avx2(x, out) };
            return;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        unsafe { step_f32_neon(x, out) };
        return;
    }

    step_f32_scalar(x, out);
}

/// SIMD-accelerated vector multiplication: out = a * b
pub fn mul_f32(a: &[f32], b: &[f32], out: &mut [f32]) {
    #[cfg(target_arch = "x86_64")]
    {
        if has_avx2() {
            unsafe { mul_f32_avx2(a, b, out) };
            return;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        unsafe { mul_f32_neon(a, b, out) };
        return;
    }

    mul_f32_scalar(a, b, out);
}

// === Scalar implementations ===

fn max0_f32_scalar(x: &[f32], out: &mut [f32]) {
    for i in 0..x.len() {
        out[i] = x[i].max(0.0);
    }
}

fn step_f32_scalar(x: &[f32], out: &mut [f32]) {
    for i in 0..x.len() {
        out[i] = if x[i] > 0.0 { 1.0 } else { 0.0 };
    }
}

fn mul_f32_scalar(a: &[f32], b: &[f32], out: &mut [f32]) {
    for i in 0..a.len() {
        out[i] = a[i] * b[i];
    }
}

// === AVX2 implementations (x86_64) ===

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn max0_f32_avx2(x: &[f32], out: &mut [f32]) {
    use std::arch::x86_64::*;

    let n = x.len();
    let chunks = n / 8;
    let remainder = n % 8;

    let x_ptr = x.as_ptr();
    let out_ptr = out.as_mut_ptr();
    let zero = _mm256_setzero_ps();

    for i in 0..chunks {
        let offset = i * 8;
        let vx = _mm256_loadu_ps(x_ptr.add(offset));
        // Operand order matters: maxps returns the second operand on NaN,
        // matching f32::max(x, 0.0) = 0.0 for NaN lanes.
        let vy = _mm256_max_ps(vx, zero);
        _mm256_storeu_ps(out_ptr.add(offset), vy);
    }

    // Handle remainder
    let start = chunks * 8;
    for i in 0..remainder {
        *out_ptr.add(start + i) = (*x_ptr.add(start + i)).max(0.0);
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn step_f32_avx2(x: &[f32], out: &mut [f32]) {
    use std::arch::x86_64::*;

    let n = x.len();
    let chunks = n / 8;
    let remainder = n % 8;

    let x_ptr = x.as_ptr();
    let out_ptr = out.as_mut_ptr();
    let zero = _mm256_setzero_ps();
    let one = _mm256_set1_ps(1.0);

    for i in 0..chunks {
        let offset = i * 8;
        let vx = _mm256_loadu_ps(x_ptr.add(offset));
        // Ordered x > 0 gives an all-ones lane mask; AND with 1.0 turns it
        // into a 0.0/1.0 indicator. NaN lanes compare false.
        let mask = _mm256_cmp_ps::<_CMP_GT_OQ>(vx, zero);
        let vy = _mm256_and_ps(mask, one);
        _mm256_storeu_ps(out_ptr.add(offset), vy);
    }

    let start = chunks * 8;
    for i in 0..remainder {
        *out_ptr.add(start + i) = if *x_ptr.add(start + i) > 0.0 { 1.0 } else { 0.0 };
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn mul_f32_avx2(a: &[f32], b: &[f32], out: &mut [f32]) {
    use std::arch::x86_64::*;

    let n = a.len();
    let chunks = n / 8;
    let remainder = n % 8;

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    for i in 0..chunks {
        let offset = i * 8;
        let va = _mm256_loadu_ps(a_ptr.add(offset));
        let vb = _mm256_loadu_ps(b_ptr.add(offset));
        let vc = _mm256_mul_ps(va, vb);
        _mm256_storeu_ps(out_ptr.add(offset), vc);
    }

    let start = chunks * 8;
    for i in 0..remainder {
        *out_ptr.add(start + i) = *a_ptr.add(start + i) * *b_ptr.add(start + i);
    }
}

// === NEON implementations (aarch64) ===

#[cfg(target_arch = "aarch64")]
unsafe fn max0_f32_neon(x: &[f32], out: &mut [f32]) {
    use std::arch::aarch64::*;

    let n = x.len();
    let chunks = n / 4;
    let remainder = n % 4;

    let x_ptr = x.as_ptr();
    let out_ptr = out.as_mut_ptr();
    let zero = vdupq_n_f32(0.0);

    for i in 0..chunks {
        let offset = i * 4;
        let vx = vld1q_f32(x_ptr.add(offset));
        // fmaxnm rather than fmax: returns the non-NaN operand, matching
        // f32::max on NaN lanes.
        let vy = vmaxnmq_f32(vx, zero);
        vst1q_f32(out_ptr.add(offset), vy);
    }

    let start = chunks * 4;
    for i in 0..remainder {
        *out_ptr.add(start + i) = (*x_ptr.add(start + i)).max(0.0);
    }
}

#[cfg(target_arch = "aarch64")]
unsafe fn step_f32_neon(x: &[f32], out: &mut [f32]) {
    use std::arch::aarch64::*;

    let n = x.len();
    let chunks = n / 4;
    let remainder = n % 4;

    let x_ptr = x.as_ptr();
    let out_ptr = out.as_mut_ptr();
    let zero = vdupq_n_f32(0.0);
    let one = vreinterpretq_u32_f32(vdupq_n_f32(1.0));

    for i in 0..chunks {
        let offset = i * 4;
        let vx = vld1q_f32(x_ptr.add(offset));
        let mask = vcgtq_f32(vx, zero);
        let vy = vreinterpretq_f32_u32(vandq_u32(mask, one));
        vst1q_f32(out_ptr.add(offset), vy);
    }

    let start = chunks * 4;
    for i in 0..remainder {
        *out_ptr.add(start + i) = if *x_ptr.add(start + i) > 0.0 { 1.0 } else { 0.0 };
    }
}

#[cfg(target_arch = "aarch64")]
unsafe fn mul_f32_neon(a: &[f32], b: &[f32], out: &mut [f32]) {
    use std::arch::aarch64::*;

    let n = a.len();
    let chunks = n / 4;
    let remainder = n % 4;

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    for i in 0..chunks {
        let offset = i * 4;
        let va = vld1q_f32(a_ptr.add(offset));
        let vb = vld1q_f32(b_ptr.add(offset));
        let vc = vmulq_f32(va, vb);
        vst1q_f32(out_ptr.add(offset), vc);
    }

    let start = chunks * 4;
    for i in 0..remainder {
        *out_ptr.add(start + i) = *a_ptr.add(start + i) * *b_ptr.add(start + i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max0_f32() {
        // 9 elements exercises both the vector body and the remainder loop.
        let x = vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        let mut out = vec![0.0; 9];

        max0_f32(&x, &mut out);
        assert_eq!(out, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_step_f32() {
        let x = vec![-2.0, -0.5, 0.0, 0.5, 2.0];
        let mut out = vec![0.0; 5];

        step_f32(&x, &mut out);
        assert_eq!(out, vec![0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_step_f32_zero_lane_is_exact() {
        // The mask at 0 must be an exact 0.0, never NaN.
        let x = vec![0.0; 8];
        let mut out = vec![1.0; 8];

        step_f32(&x, &mut out);
        for (i, v) in out.iter().enumerate() {
            assert!(!v.is_nan(), "lane {} is NaN", i);
            assert_eq!(*v, 0.0, "lane {}", i);
        }
    }

    #[test]
    fn test_mul_f32() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![2.0, 2.0, 2.0, 2.0];
        let mut out = vec![0.0; 4];

        mul_f32(&a, &b, &mut out);
        assert_eq!(out, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_kernels_match_scalar_on_assorted_lengths() {
        // Lengths straddling the 8-lane (AVX2) and 4-lane (NEON) widths.
        for n in [1usize, 3, 4, 7, 8, 9, 16, 31, 100] {
            let x: Vec<f32> = (0..n).map(|i| i as f32 - n as f32 / 2.0).collect();

            let mut out = vec![0.0; n];
            max0_f32(&x, &mut out);
            let expected: Vec<f32> = x.iter().map(|&v| v.max(0.0)).collect();
            assert_eq!(out, expected, "max0 at length {}", n);

            let mut out = vec![0.0; n];
            step_f32(&x, &mut out);
            let expected: Vec<f32> = x
                .iter()
                .map(|&v| if v > 0.0 { 1.0 } else { 0.0 })
                .collect();
            assert_eq!(out, expected, "step at length {}", n);
        }
    }

    #[test]
    fn test_max0_f32_nan_lanes() {
        // NaN both inside the vector body and in the remainder tail.
        let x = vec![f32::NAN, -1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0, f32::NAN];
        let mut out = vec![0.0; 9];

        // NaN follows f32::max, which returns the non-NaN operand.
        max0_f32(&x, &mut out);
        assert_eq!(out, vec![0.0, 0.0, 2.0, 0.0, 4.0, 0.0, 6.0, 0.0, 0.0]);

        // NaN > 0 is false, so the mask is 0.
        step_f32(&x, &mut out);
        assert_eq!(out, vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_max0_f32_infinities() {
        let x = vec![f32::NEG_INFINITY, f32::INFINITY];
        let mut out = vec![0.0; 2];

        max0_f32(&x, &mut out);
        assert_eq!(out, vec![0.0, f32::INFINITY]);

        step_f32(&x, &mut out);
        assert_eq!(out, vec![0.0, 1.0]);
    }
}
