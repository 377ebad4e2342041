use crate::models::{Batch, Stargazer};

/// Greedily groups stargazer ids into batches, in input order.
///
/// A batch is closed when the next stargazer would push its summed
/// `starred_repos_count` over `max_batch_weight`, or when it already holds
/// `max_batch_size` ids. Stargazers with no stars are skipped. A stargazer
/// heavier than `max_batch_weight` on its own still gets a batch of one.
pub fn binpack(light: &[Stargazer], max_batch_weight: u32, max_batch_size: usize) -> Vec<Batch> {
    let mut batches = Vec::new();
    let mut current: Batch = Vec::new();
    let mut current_weight: u64 = 0;

    for stargazer in light {
        let weight = u64::from(stargazer.starred_repos_count);
        if weight == 0 {
            continue;
        }

        if current_weight + weight > u64::from(max_batch_weight)
            || current.len() >= max_batch_size
        {
            if !current.is_empty() {
                batches.push(std::mem::take(&mut current));
            }
            current_weight = 0;
        }

        current.push(stargazer.id.clone());
        current_weight += weight;
    }

    if !current.is_empty() {
        batches.push(current);
    }

    batches
}
