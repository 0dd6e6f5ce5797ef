//! Keyword-triggered sound effects for reviewer comments.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prelude {
    pub sound: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEffect {
    pub keyword: &'static str,
    pub sound: &'static str,
    pub prelude: Option<Prelude>,
}

/// Declaration order decides ties: the first keyword found in a comment wins.
pub const EFFECTS: [SoundEffect; 24] = [
    SoundEffect {
        keyword: "crowd cheer",
        sound: "./effects/crowd-cheer-canon.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "crowd boo",
        sound: "./effects/crowd-boo-canon.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "aww",
        sound: "./effects/crowd-aww.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "circus",
        sound: "./effects/circus-canon.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "oof",
        sound: "./effects/gottahurt.mp3",
        prelude: Some(Prelude {
            sound: "./effects/gasp_SJHmiqB.mp3",
            label: "[gasp]",
        }),
    },
    SoundEffect {
        keyword: "kill",
        sound: "./effects/they'r tryin' to kill u!!.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "bell",
        sound: "./effects/wwe-bell.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "evil",
        sound: "./effects/joker-laughing.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "picnic",
        sound: "./effects/morningmood.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "voiceover of someone",
        sound: "./effects/sohadyouneed.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "casablanca",
        sound: "./effects/Casablanca - As Time Goes By.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "snake",
        sound: "./effects/im-a-snake-mp3cut.mp3",
        prelude: Some(Prelude {
            sound: "./effects/rattlesnake_sound.mp3",
            label: "rattlesnake",
        }),
    },
    SoundEffect {
        keyword: "lion",
        sound: "./effects/lion-roar-sound-effect.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "sexy",
        sound: "./effects/You Sexy Thing.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "wedding",
        sound: "./effects/Mendelssohn-wedding-march.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "conch",
        sound: "./effects/conch-middle-00-94462.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "narrator",
        sound: "./effects/AntonioVivaldi_Spring.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "horn",
        sound: "./effects/fanfare-1-276819.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "cough",
        sound: "./effects/man-death-scream-186763.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "sword out",
        sound: "./effects/sword-sound-260274.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "sheath",
        sound: "./effects/sword-re-sheathed-99334.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "bach",
        sound: "./effects/Orchestral Suite No. 3 in D major, BWV 1068 - II. Air.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "fear",
        sound: "./effects/dontfearthereaper.mp3",
        prelude: None,
    },
    SoundEffect {
        keyword: "bald",
        sound: "./effects/nightonbaldmountain.mp3",
        prelude: None,
    },
];

/// Case-insensitive first-match lookup against the comment text.
pub fn find(comment_text: &str) -> Option<&'static SoundEffect> {
    let lowered = comment_text.to_lowercase();
    EFFECTS.iter().find(|e| lowered.contains(e.keyword))
}
