//! Demo data the views start from.

use super::reorder::ListItem;
use super::tree::TreeNode;

pub fn songs() -> Vec<ListItem> {
    vec![
        ListItem::new(1, "The Beatles", "Hey Jude", 1),
        ListItem::new(2, "Neil Young", "My My, Hey Hey", 2),
        ListItem::new(3, "The Rolling Stones", "Wild Horses", 3),
        ListItem::new(4, "Led Zeppelin", "Ten Years Gone", 4),
        ListItem::new(5, "Triumph", "Magic Power", 5),
    ]
}

pub fn file_tree() -> Vec<TreeNode> {
    use TreeNode as N;

    vec![N::folder(
        "Home",
        vec![
            N::folder(
                "Movies",
                vec![
                    N::folder(
                        "Action",
                        vec![
                            N::folder(
                                "2000s",
                                vec![N::file("Gladiator.mp4"), N::file("The-Dark-Knight.mp4")],
                            ),
                            N::folder("2010s", vec![]),
                        ],
                    ),
                    N::folder(
                        "Comedy",
                        vec![N::folder("2000s", vec![N::file("Superbad.mp4")])],
                    ),
                    N::folder(
                        "Drama",
                        vec![N::folder("2000s", vec![N::file("American-Beauty.mp4")])],
                    ),
                ],
            ),
            N::folder(
                "Music",
                vec![N::folder("Rock", vec![]), N::folder("Classical", vec![])],
            ),
            N::folder("Pictures", vec![]),
            N::folder("Documents", vec![]),
            N::file("passwords.txt"),
        ],
    )]
}

/// Sidebar navigation labels, top to bottom.
pub const NAV_LINKS: [&str; 5] = ["Dashboard", "Projects", "Tasks", "Reporting", "Users"];
