//! Built-in roster and seed gallery content.

use crate::entities::{Ability, Character, Difficulty, FanArt, FanArtId, Guide, Role};

pub(super) fn characters() -> Vec<Character> {
    vec![ember(), solenne(), kaio(), lyra()]
}

/// Fan art shown on first run, or after stored data turns out to be unusable.
pub fn seed_fan_art() -> Vec<FanArt> {
    vec![
        FanArt::new(
            FanArtId::new("fa-ember-1"),
            "ember",
            "AvaSketch",
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=800&q=80",
            "Ember mid-dive leaving a blazing horizon.",
        ),
        FanArt::new(
            FanArtId::new("fa-solenne-1"),
            "solenne",
            "LumenWorks",
            "https://images.unsplash.com/photo-1477764250597-c3c8c5f7b43d?auto=format&fit=crop&w=800&q=80",
            "Aurora motif capturing Solenne's radiance.",
        ),
        FanArt::new(
            FanArtId::new("fa-kaio-1"),
            "kaio",
            "Frostbyte",
            "https://images.unsplash.com/photo-1618005198919-d3d4b5a92eee?auto=format&fit=crop&w=800&q=80",
            "Kaio holding the line amidst a frozen siege.",
        ),
    ]
}

fn ember() -> Character {
    Character::new("ember", "Ember Lys", Role::Assassin, Difficulty::Advanced)
        .with_alias("The Phoenix Blade")
        .with_element("Pyro Edge Operatives")
        .with_portrait("https://images.unsplash.com/photo-1511512578047-dfb367046420?auto=format&fit=crop&w=700&q=80")
        .with_background(
            "Raised within the covert Pyro Edge operatives, Ember channels arcane flames through \
             twin blades forged from meteor shards. Her tactical upbringing taught her to strike \
             fast, vanish quicker, and ignite hope in her allies.",
        )
        .with_ability(Ability::new(
            "Ignition Dash",
            "Blink forward leaving a trail of embers that detonates after a short delay. \
             Passing through enemies grants Ember a burst shield.",
        ))
        .with_ability(Ability::new(
            "Solar Flourish",
            "Unleash a spinning flame arc that ramps up damage with each consecutive hit within 6 seconds.",
        ))
        .with_ability(Ability::new(
            "Ashen Recall",
            "Mark a location with a Phoenix sigil and return to it after 4 seconds, healing for \
             damage dealt in that time frame.",
        ))
        .with_ability(Ability::new(
            "Phoenix Overrun (Ultimate)",
            "Ember erupts into an infernal avatar, gaining untargetable frames and empowered \
             strikes that apply burn stacks and explode at max stacks.",
        ))
        .with_strengths([
            "Exceptional mobility for map rotations and flanks.",
            "High burst damage that scales with aggressive playstyles.",
            "Self-peel through Ashen Recall keeps her safe during dives.",
        ])
        .with_guide(
            Guide::new(
                "Advanced Flanking Routes",
                "Optimize Ember's mobility by mastering vertical routes and timing Ashen Recall perfectly.",
            )
            .with_steps([
                "Scout enemy backline positioning before engaging.",
                "Dash behind cover using Ignition Dash to avoid crowd control.",
                "Activate Phoenix Overrun to disrupt priority targets.",
            ])
            .with_tips([
                "Always mark a safe recall spot before committing.",
                "Time Solar Flourish with team disables for guaranteed burn stacks.",
            ]),
        )
        .with_guide(
            Guide::new(
                "Combo Sequencing",
                "Execute reliable combos that melt tanks while keeping you elusive.",
            )
            .with_steps([
                "Ignition Dash through the target to start burn stacking.",
                "Follow with Solar Flourish to refresh burn timers.",
                "Finish with Phoenix Overrun for the final burst.",
            ])
            .with_tips([
                "Reset Ashen Recall between fights to maintain tempo.",
                "Cancel basic attack animations with Solar Flourish for higher DPS.",
            ]),
        )
        .with_tags(["Burst", "Mobility", "High Skill"])
}

fn solenne() -> Character {
    Character::new("solenne", "Solenne Vale", Role::Support, Difficulty::Intermediate)
        .with_alias("Aurora Conduit")
        .with_element("Luminous Choir")
        .with_portrait("https://images.unsplash.com/photo-1521119989659-a83eee488004?auto=format&fit=crop&w=700&q=80")
        .with_background(
            "Solenne channels the northern aurora, weaving radiant harmonics that shield allies \
             and blind foes. As the youngest maestro of the Luminous Choir, she carries relic \
             chimes tuned to the frequency of dawn.",
        )
        .with_ability(Ability::new(
            "Radiant Veil",
            "Project a barrier that absorbs damage and pulses healing when it expires.",
        ))
        .with_ability(Ability::new(
            "Prism Volley",
            "Fire refracted bolts that slow enemies and briefly reveal invisible targets.",
        ))
        .with_ability(Ability::new(
            "Choral Resurgence",
            "Channel restorative resonance that cleanses debuffs and grants movement speed.",
        ))
        .with_ability(Ability::new(
            "Symphony of Daybreak (Ultimate)",
            "Summon an aurora field that grants allies invulnerability frames while silencing \
             and disarming enemies caught within.",
        ))
        .with_strengths([
            "Hybrid defensive utility that shields and heals simultaneously.",
            "Reliable crowd control with Prism Volley slows and reveals.",
            "Late-game team fight swing via Symphony of Daybreak.",
        ])
        .with_guide(
            Guide::new(
                "Protective Rotations",
                "Master the spacing needed to keep carries alive without overextending.",
            )
            .with_steps([
                "Open with Radiant Veil during poke phases to negate chip damage.",
                "Hold Choral Resurgence until allies need a cleanse or speed boost.",
                "Use Symphony of Daybreak reactively to counter dive compositions.",
            ])
            .with_tips([
                "Synchronize Veil expiration with ally burst windows for extra heals.",
                "Prism Volley reveals cloak units—cast preemptively on choke points.",
            ]),
        )
        .with_tags(["Healer", "Utility", "Control"])
}

fn kaio() -> Character {
    Character::new("kaio", "Kaio Rime", Role::Tank, Difficulty::Beginner)
        .with_alias("Glacial Vanguard")
        .with_element("Winterguard Legion")
        .with_portrait("https://images.unsplash.com/photo-1521092510655-3ce84d0b0c54?auto=format&fit=crop&w=700&q=80")
        .with_background(
            "Kaio leads the Winterguard, wielding a living glacier shield that adapts to enemy \
             pressure. His calm resilience and tactical foresight make him the unbreakable \
             frontline every squad needs.",
        )
        .with_ability(Ability::new(
            "Permafrost Bulwark",
            "Raise an adaptive barrier that grows thicker the longer it stands.",
        ))
        .with_ability(Ability::new(
            "Frost Herald",
            "Send a shard sentinel forward that taunts enemies upon contact and explodes after \
             absorbing damage.",
        ))
        .with_ability(Ability::new(
            "Tundra Surge",
            "Slide forward, knocking enemies airborne and leaving an icy trail that slows pursuers.",
        ))
        .with_ability(Ability::new(
            "Glacial Cataclysm (Ultimate)",
            "Anchor to the battlefield, drawing enemies inward before shattering the ground for \
             massive area damage.",
        ))
        .with_strengths([
            "Straightforward kit ideal for new tank players.",
            "Excellent zone control with Frost Herald and Glacial Cataclysm.",
            "Reliable initiation and peel through Tundra Surge.",
        ])
        .with_guide(
            Guide::new(
                "Frontline Fundamentals",
                "Learn how to anchor team fights and absorb key cooldowns efficiently.",
            )
            .with_steps([
                "Position Permafrost Bulwark to block primary sight lines.",
                "Follow Frost Herald taunt with Tundra Surge for a guaranteed juggle.",
                "Save Glacial Cataclysm to counter enemy dives or secure objectives.",
            ])
            .with_tips([
                "Refresh Bulwark as soon as it breaks; stagger casts to deny burst windows.",
                "Ping ultimate availability so allies can play around the vacuum effect.",
            ]),
        )
        .with_tags(["Frontline", "Initiator", "Beginner Friendly"])
}

fn lyra() -> Character {
    Character::new("lyra", "Lyra Quell", Role::Marksman, Difficulty::Intermediate)
        .with_alias("Starborne Sniper")
        .with_element("Nebula Rangers")
        .with_portrait("https://images.unsplash.com/photo-1517697471339-4aa32003c11a?auto=format&fit=crop&w=700&q=80")
        .with_background(
            "A prodigy within the Nebula Rangers, Lyra manipulates gravity wells to stabilize \
             her rail shots. Each bullet is etched with constellations that illuminate targets \
             for her squad.",
        )
        .with_ability(Ability::new(
            "Celestial Scope",
            "Activate a focusing stance that increases range and headshot damage while slowing movement.",
        ))
        .with_ability(Ability::new(
            "Gravity Lash",
            "Launch a tether that roots the first enemy hit and amplifies subsequent damage.",
        ))
        .with_ability(Ability::new(
            "Orbital Relay",
            "Deploy a drone that scouts terrain and grants vision cones to nearby allies.",
        ))
        .with_ability(Ability::new(
            "Singularity Lance (Ultimate)",
            "Charge a piercing beam that detonates when it exits an enemy, creating a miniature \
             black hole.",
        ))
        .with_strengths([
            "Top-tier pick potential with long-range headshots.",
            "Team utility via Orbital Relay vision sharing.",
            "Can self-peel using Gravity Lash root.",
        ])
        .with_guide(
            Guide::new(
                "Precision Tracking",
                "Train muscle memory for scoped shots while maintaining map awareness.",
            )
            .with_steps([
                "Set up in elevated sight lines before the fight starts.",
                "Tag priority targets with Gravity Lash to slow their retreat.",
                "Trigger Singularity Lance when enemies clump on objectives.",
            ])
            .with_tips([
                "Scope in only when safe; reposition after every two shots.",
                "Coordinate with controllers to push enemies into your sight lines.",
            ]),
        )
        .with_tags(["Sniper", "Vision", "Burst"])
}
