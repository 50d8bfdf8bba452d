//! Static layout of the home page and the two card kinds

use crate::constants::*;
use crate::dom::builder::{create_element, Children, Node};
use crate::types::{Post, User};
use crate::utils::copyright_line;

fn auth_button(logged_in: bool) -> Node {
    let label = if logged_in { "Log Out" } else { "Log In" };
    create_element(
        "a",
        [("href", "./index.html"), ("class", "btn"), ("id", AUTH_BTN_ID)],
        label,
    )
}

pub fn header_section(logged_in: bool) -> Node {
    let header_content = create_element(
        "div",
        [("class", "content")],
        vec![create_element(
            "p",
            [("class", "text")],
            "Explore your postcards and connect with bloggers.",
        )],
    );

    let buttons = create_element(
        "div",
        [("class", "buttons")],
        vec![
            create_element(
                "a",
                [("href", "./registration.html"), ("class", "btn")],
                "Sign Up",
            ),
            auth_button(logged_in),
        ],
    );

    create_element(
        "header",
        [("class", "header")],
        vec![
            buttons,
            create_element("h1", [("class", "heading")], "Welcome to Your Workspace"),
            header_content,
        ],
    )
}

pub fn blogger_profile_card(blogger: &User) -> Node {
    let avatar = blogger.avatar_url().unwrap_or(DEFAULT_AVATAR_URL);
    create_element(
        "div",
        [("class", "blogger-item"), ("id", blogger.id.as_str())],
        vec![
            create_element(
                "img",
                [("class", "avatar"), ("src", avatar), ("alt", "user")],
                Children::None,
            ),
            create_element("div", [("class", "blogger-name")], blogger.full_name()),
        ],
    )
}

fn sidebar() -> Node {
    create_element(
        "div",
        [("class", "sidebar")],
        vec![
            create_element("h2", [("class", "_title")], "Bloggers"),
            create_element(
                "ul",
                [("id", BLOGGER_LIST_ID), ("class", "bloggers-container")],
                Children::None,
            ),
        ],
    )
}

pub fn post_card(post: &Post) -> Node {
    let card_id = format!("post-{}", post.id);
    let id = post.id.as_str();
    create_element(
        "div",
        [("class", "box post"), ("id", card_id.as_str()), ("data-id", id)],
        vec![
            create_element(
                "div",
                [("class", "post-header")],
                vec![
                    create_element("h3", [("class", "post-title")], post.title.as_str()),
                    create_element("p", [("class", "author-name")], post.author_name.as_str()),
                ],
            ),
            create_element(
                "div",
                [("class", "post-description")],
                vec![
                    create_element(
                        "img",
                        [
                            ("class", "post-image"),
                            ("src", post.img.as_str()),
                            ("alt", "post image"),
                        ],
                        Children::None,
                    ),
                    create_element("p", [("class", "post-text")], post.story.as_str()),
                ],
            ),
            create_element(
                "div",
                [("class", "post-buttons")],
                vec![
                    create_element("button", [("class", "edit-btn"), ("data-id", id)], "Edit"),
                    create_element(
                        "button",
                        [("class", "delete-btn"), ("data-id", id)],
                        "Delete",
                    ),
                ],
            ),
        ],
    )
}

fn footer_section(year: i32) -> Node {
    create_element(
        "footer",
        [("class", "footer")],
        vec![
            create_element("p", [("class", "footer-text")], "Powered by Isabella Karibian"),
            create_element("p", [("class", "footer-date")], copyright_line(year)),
        ],
    )
}

fn main_content_section(year: i32) -> Node {
    create_element(
        "main",
        [("class", "main-section")],
        vec![
            sidebar(),
            create_element(
                "div",
                [("class", "box")],
                vec![
                    create_element(
                        "div",
                        [("class", "header-with-btn")],
                        vec![
                            create_element("h2", [("class", "_title")], "Posts"),
                            create_element(
                                "button",
                                [("class", "create-Post-Btn"), ("id", CREATE_POST_BTN_ID)],
                                "Create Post",
                            ),
                        ],
                    ),
                    // Cards arrive once the feed request resolves
                    create_element(
                        "section",
                        [("class", "posts"), ("id", POSTS_ID)],
                        Children::Deferred,
                    ),
                    footer_section(year),
                ],
            ),
        ],
    )
}

/// Whole page root, ready to be mounted on the document body
pub fn create_layout(logged_in: bool, year: i32) -> Node {
    create_element(
        "div",
        [("class", "container-root")],
        vec![header_section(logged_in), main_content_section(year)],
    )
}
