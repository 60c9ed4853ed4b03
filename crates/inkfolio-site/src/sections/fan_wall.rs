//! Fan comments with likes.

use crate::context::LanguageSnapshot;
use crate::selector::{Localize, Localized};
use inkfolio_i18n::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::warn;

/// Identifier of a comment in [`COMMENTS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u32);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fan wall copy
#[derive(Debug, Clone, Copy)]
pub struct FanWallCopy {
    pub like: &'static str,
    pub reply: &'static str,
    pub replied: &'static str,
    pub share_prompt: &'static str,
    pub share_invite: &'static str,
    pub join: &'static str,
}

/// Fan wall copy per language.
pub const FAN_WALL_COPY: Localized<FanWallCopy> = Localized::new(
    FanWallCopy {
        like: "Like",
        reply: "Reply",
        replied: "REPLIED",
        share_prompt: "Want to share your thoughts?",
        share_invite: "Follow me on social media and join our amazing community!",
        join: "Join the Adventure!",
    },
    FanWallCopy {
        like: "いいね",
        reply: "返信",
        replied: "返信済み",
        share_prompt: "あなたの考えを共有したいですか？",
        share_invite: "ソーシャルメディアで私をフォローして、素晴らしいコミュニティに参加してください！",
        join: "冒険に参加しよう！",
    },
);

/// Fan comment
#[derive(Debug, Clone, Copy)]
pub struct Comment {
    pub id: CommentId,
    pub name: &'static str,
    pub avatar: &'static str,
    pub message: Localized<&'static str>,
    pub likes: u32,
    pub posted: &'static str,
    pub replied: bool,
}

/// Comments, newest first.
pub static COMMENTS: [Comment; 6] = [
    Comment {
        id: CommentId(1),
        name: "Nami Navigator",
        avatar: "🧡",
        message: Localized::new(
            "Your art style is absolutely amazing! The way you capture emotions in your characters is incredible. Keep up the fantastic work!",
            "あなたのアートスタイルは本当に素晴らしいです！キャラクターの感情をとらえる方法が信じられません。素晴らしい仕事を続けてください！",
        ),
        likes: 23,
        posted: "2 hours ago",
        replied: true,
    },
    Comment {
        id: CommentId(2),
        name: "Zoro Swordsman",
        avatar: "⚔️",
        message: Localized::new(
            "The action scenes you draw are so dynamic! I can feel the power behind every move. Your commission was perfect!",
            "あなたが描くアクションシーンはとてもダイナミックです！すべての動きの背後にある力を感じることができます。あなたの委託は完璧でした！",
        ),
        likes: 18,
        posted: "5 hours ago",
        replied: false,
    },
    Comment {
        id: CommentId(3),
        name: "Sanji Cook",
        avatar: "🍳",
        message: Localized::new(
            "Your artwork always makes me smile! The details you put into each piece are extraordinary. Thank you for sharing your talent!",
            "あなたのアートワークはいつも私を笑顔にしてくれます！各作品に込めた詳細は並外れています。あなたの才能を共有してくれてありがとう！",
        ),
        likes: 31,
        posted: "1 day ago",
        replied: false,
    },
    Comment {
        id: CommentId(4),
        name: "Usopp Sniper",
        avatar: "🎯",
        message: Localized::new(
            "I've been following your work for years and it just keeps getting better! Your latest pieces are your best yet!",
            "何年もあなたの作品をフォローしていますが、それはどんどん良くなっています！あなたの最新作品は今までで最高です！",
        ),
        likes: 42,
        posted: "2 days ago",
        replied: true,
    },
    Comment {
        id: CommentId(5),
        name: "Chopper Doctor",
        avatar: "🦌",
        message: Localized::new(
            "Your art inspires me to keep practicing! One day I hope to create something as beautiful as your work!",
            "あなたのアートは私に練習を続けるよう促します！いつの日か、あなたの作品のように美しいものを作りたいと思います！",
        ),
        likes: 15,
        posted: "3 days ago",
        replied: false,
    },
    Comment {
        id: CommentId(6),
        name: "Robin Archaeologist",
        avatar: "📚",
        message: Localized::new(
            "The storytelling in your artwork is phenomenal. Each piece tells a complete story without words. Truly masterful!",
            "あなたのアートワークのストーリーテリングは驚異的です。各作品は言葉なしで完全な物語を語ります。本当に巧妙です！",
        ),
        likes: 37,
        posted: "1 week ago",
        replied: false,
    },
];

/// Rendered comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: CommentId,
    pub name: &'static str,
    pub avatar: &'static str,
    pub message: String,
    pub likes: u32,
    pub liked: bool,
    pub posted: &'static str,
    pub replied: bool,
}

impl Localize for Comment {
    type View = CommentView;

    fn localize(&self, language: LanguageCode) -> CommentView {
        CommentView {
            id: self.id,
            name: self.name,
            avatar: self.avatar,
            message: self.message.text(language),
            likes: self.likes,
            liked: false,
            posted: self.posted,
            replied: self.replied,
        }
    }
}

/// Rendered fan wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanWallView {
    pub title: String,
    pub subtitle: String,
    pub like_label: &'static str,
    pub reply_label: &'static str,
    pub replied_badge: &'static str,
    pub comments: Vec<CommentView>,
    pub share_prompt: &'static str,
    pub share_invite: &'static str,
    pub share_button: String,
    pub join_label: &'static str,
}

/// Liked comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanWallState {
    liked: BTreeSet<CommentId>,
}

impl FanWallState {
    /// Like or unlike a comment, returning whether it is now liked
    ///
    /// Ids that are not on the wall are ignored.
    pub fn toggle_like(&mut self, id: CommentId) -> bool {
        if !COMMENTS.iter().any(|comment| comment.id == id) {
            warn!(comment = %id, "Ignoring like for unknown comment");
            return false;
        }

        if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        }
    }

    /// Whether a comment is liked
    #[must_use]
    pub fn is_liked(&self, id: CommentId) -> bool {
        self.liked.contains(&id)
    }

    /// Comments in table order with likes applied
    #[must_use]
    pub fn comments(&self, language: LanguageCode) -> Vec<CommentView> {
        COMMENTS
            .iter()
            .map(|comment| {
                let mut view = comment.localize(language);
                if self.is_liked(comment.id) {
                    view.liked = true;
                    view.likes += 1;
                }
                view
            })
            .collect()
    }

    /// Render the fan wall
    #[must_use]
    pub fn view(&self, snapshot: &LanguageSnapshot) -> FanWallView {
        let language = snapshot.language();
        let strings = &snapshot.bundle().fan_wall;
        let copy = FAN_WALL_COPY.get(language);

        FanWallView {
            title: strings.title.clone(),
            subtitle: strings.subtitle.clone(),
            like_label: copy.like,
            reply_label: copy.reply,
            replied_badge: copy.replied,
            comments: self.comments(language),
            share_prompt: copy.share_prompt,
            share_invite: copy.share_invite,
            share_button: strings.share_button.clone(),
            join_label: copy.join,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_toggles() {
        let mut state = FanWallState::default();
        assert!(state.toggle_like(CommentId(4)));
        let usopp = &state.comments(LanguageCode::En)[3];
        assert_eq!(usopp.likes, 43);
        assert!(usopp.liked);

        assert!(!state.toggle_like(CommentId(4)));
        assert_eq!(state.comments(LanguageCode::En)[3].likes, 42);
    }

    #[test]
    fn test_unknown_comment_is_ignored() {
        let mut state = FanWallState::default();
        assert!(!state.toggle_like(CommentId(0)));
        assert!(!state.is_liked(CommentId(0)));
    }

    #[test]
    fn test_names_are_not_translated() {
        let state = FanWallState::default();
        let en = state.comments(LanguageCode::En);
        let jp = state.comments(LanguageCode::Jp);
        for (a, b) in en.iter().zip(&jp) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.id, b.id);
            assert_ne!(a.message, b.message);
        }
    }
}
