pub mod mocks;

use crate::content::Post;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` posts with ids 1..=n, in source order.
pub fn sample_posts(n: u32) -> Vec<Post> {
    (1..=n)
        .map(|id| Post {
            id,
            title: format!("sunt aut facere {}", id),
            body: format!("quia et suscipit {}", id),
            user_id: (id - 1) / 10 + 1,
        })
        .collect()
}
