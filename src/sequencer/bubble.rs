//! Bubble sort trace generation

use super::step::{AnimationStep, StepKind};

/// Appends steps with sequential ids and delays
struct Recorder {
    steps: Vec<AnimationStep>,
    speed_ms: u64,
}

impl Recorder {
    fn new(speed_ms: u64) -> Self {
        Self {
            steps: Vec::new(),
            speed_ms,
        }
    }

    fn push(&mut self, kind: StepKind, indices: Vec<usize>, array: &[i64], description: String) {
        let id = self.steps.len();
        self.steps.push(AnimationStep {
            id,
            kind,
            indices,
            array: array.to_vec(),
            description,
            delay: (id as u64).saturating_mul(self.speed_ms),
        });
    }
}

/// Record every compare and swap of an adjacent-swap sort over `input`,
/// followed by one `Complete` step holding the sorted array.
///
/// `input` is not modified. Equal neighbours are never swapped.
pub fn generate(input: &[i64], speed_ms: u64) -> Vec<AnimationStep> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut recorder = Recorder::new(speed_ms);

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            recorder.push(
                StepKind::Compare,
                vec![j, j + 1],
                &array,
                format!("Comparing {} and {}", array[j], array[j + 1]),
            );

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                recorder.push(
                    StepKind::Swap,
                    vec![j, j + 1],
                    &array,
                    format!("Swapping {} and {}", array[j + 1], array[j]),
                );
            }
        }
    }

    recorder.push(
        StepKind::Complete,
        Vec::new(),
        &array,
        "Sorting complete!".to_string(),
    );

    log::debug!(
        "generated {} steps for {} elements at {}ms",
        recorder.steps.len(),
        n,
        speed_ms
    );
    recorder.steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(steps: &[AnimationStep], kind: StepKind) -> usize {
        steps.iter().filter(|s| s.kind == kind).count()
    }

    #[test]
    fn test_small_inputs() {
        for input in [vec![], vec![42]] {
            let steps = generate(&input, 1000);
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].kind, StepKind::Complete);
            assert!(steps[0].indices.is_empty());
            assert_eq!(steps[0].array, input);
            assert_eq!(steps[0].delay, 0);
        }
    }

    #[test]
    fn test_first_steps() {
        let steps = generate(&[5, 3, 8], 1000);

        assert_eq!(steps[0].kind, StepKind::Compare);
        assert_eq!(steps[0].indices, vec![0, 1]);
        assert_eq!(steps[0].array, vec![5, 3, 8]);
        assert_eq!(steps[0].description, "Comparing 5 and 3");

        assert_eq!(steps[1].kind, StepKind::Swap);
        assert_eq!(steps[1].indices, vec![0, 1]);
        assert_eq!(steps[1].array, vec![3, 5, 8]);
        assert_eq!(steps[1].description, "Swapping 5 and 3");

        let last = steps.last().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.array, vec![3, 5, 8]);
        assert_eq!(last.description, "Sorting complete!");
    }

    #[test]
    fn test_step_counts() {
        // 3 elements: 2 + 1 compares, one swap
        let steps = generate(&[5, 3, 8], 1000);
        assert_eq!(count(&steps, StepKind::Compare), 3);
        assert_eq!(count(&steps, StepKind::Swap), 1);
        assert_eq!(count(&steps, StepKind::Complete), 1);
        assert_eq!(steps.len(), 5);

        // Reverse order swaps on every compare
        let steps = generate(&[4, 3, 2, 1], 10);
        assert_eq!(count(&steps, StepKind::Compare), 6);
        assert_eq!(count(&steps, StepKind::Swap), 6);
        assert_eq!(steps.len(), 1 + 2 * 6);
    }

    #[test]
    fn test_ids_and_delays() {
        let steps = generate(&[3, 1, 2], 250);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.id, index);
            assert_eq!(step.delay, index as u64 * 250);
        }
    }

    #[test]
    fn test_swaps_leave_pair_ordered() {
        let steps = generate(&[64, 34, 25, 12, 22, 11, 90], 1000);
        for step in steps.iter().filter(|s| s.kind == StepKind::Swap) {
            assert!(step.array[step.indices[0]] <= step.array[step.indices[1]]);
        }
        assert!(steps.iter().all(|s| s.array.len() == 7));
        assert_eq!(steps.last().unwrap().array, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_equal_values_never_swap() {
        let steps = generate(&[2, 2, 2], 100);
        assert_eq!(count(&steps, StepKind::Swap), 0);
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![9, 7, 5];
        let _ = generate(&input, 100);
        assert_eq!(input, vec![9, 7, 5]);
    }
}
