use rand::RngCore;

/// Shown when the death roll catches up with the player.
pub const DEATH_MESSAGE: &str =
    "OH NO! YOU HIT A ROCK.\nAND HAD AN EPILEPTIC FIT.\nAND, er, DIED.";

/// End-of-round flavor text. Index 0 is the original game's placeholder
/// entry and is never selected; the real messages live in slots 1..=6.
pub const MOTIVATIONAL_MESSAGES: [&str; 7] = [
    "001100111011100011110011100111100",
    "JESUS, YOU CALL THAT MOWING? I'VE SEEN\nBARBERS WHO CUT BETTER THAN THAT.SORRY.\nTHAT WASN'T FUNNY. I'LL TRY HARDER LATER.",
    "TRES MAGNIFIQUE! MEGA MOWER DUDE ALERT.\nYOU SURE ARE THE CATS RINGBINDER.\nALL SIX OF MY NIPPLES ARE TINGLING.",
    "OH NO! BY THE LOOK OF THAT LAWN\nIT LOOKS LIKE IT'S\nTIME TO CALL NATIONAL RESCUE",
    "LAWNMOWER MAN IN NEAT GRASS SHOCK\nANOTHER SUN SCOOP\nREAD MORE ON PAGE 3!",
    "OH DEAR. THAT WAS A BIT CRAP\nDON'T LET ME SEE YOU ROUND HERE AGAIN OR\nI'LL SET MY LETTUCE ON YOU.",
    "NOT BAD AT ALL\nWELL WORTH A CHEESE SARNIE\nMY HEARTY CONGRATULATIONS.",
];

/// Pick one of the six real motivational messages uniformly.
pub fn pick_motivational(rng: &mut impl RngCore) -> &'static str {
    let idx = 1 + (rng.next_u32() as usize) % (MOTIVATIONAL_MESSAGES.len() - 1);
    MOTIVATIONAL_MESSAGES[idx]
}
