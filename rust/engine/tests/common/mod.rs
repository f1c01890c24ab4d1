#![allow(dead_code)]

use handparse_engine::grammar::{Grammar, Room};

pub fn stars() -> &'static Grammar {
    Grammar::for_room(Room::Stars)
}

pub fn pkr() -> &'static Grammar {
    Grammar::for_room(Room::Pkr)
}

/// 6-max cash game, seat 5 empty. Hero (Walkman, seat 4) goes to showdown
/// on a full board and loses to Capricorn.
pub const STARS_CASH_SHOWDOWN: &str = "\
PokerStars Hand #105026771696:  Hold'em No Limit ($0.25/$0.50 USD) - 2013/10/04 17:24:39 CET [2013/10/04 11:24:39 ET]
Table 'Aase II' 6-max Seat #3 is the button
Seat 1: laxi23 ($51.89 in chips)
Seat 2: NikosMRF ($50 in chips)
Seat 3: Capricorn ($33.60 in chips)
Seat 4: Walkman ($50 in chips)
Seat 6: barly123 ($50.35 in chips)
Walkman: posts small blind $0.25
barly123: posts big blind $0.50
*** HOLE CARDS ***
Dealt to Walkman [9s 6d]
laxi23: folds
NikosMRF: folds
Capricorn: calls $0.50
Walkman: calls $0.25
barly123: checks
*** FLOP *** [7d 3c Jd]
Walkman: checks
barly123: checks
Capricorn: bets $1.37
Walkman: calls $1.37
barly123: folds
*** TURN *** [7d 3c Jd] [Js]
Walkman: checks
Capricorn: checks
*** RIVER *** [7d 3c Jd Js] [5h]
Walkman: bets $2
Capricorn: calls $2
*** SHOW DOWN ***
Walkman: shows [9s 6d] (a pair of Jacks)
Capricorn: shows [Jh Tc] (three of a kind, Jacks)
Capricorn collected $8.05 from pot
*** SUMMARY ***
Total pot $8.24 | Rake $0.19
Board [7d 3c Jd Js 5h]
Seat 1: laxi23 folded before Flop (didn't bet)
Seat 2: NikosMRF folded before Flop (didn't bet)
Seat 3: Capricorn (button) showed [Jh Tc] and won ($8.05) with three of a kind, Jacks
Seat 4: Walkman (small blind) showed [9s 6d] and lost with a pair of Jacks
Seat 6: barly123 (big blind) folded on the Flop
";

/// Same table, the hand ends preflop: no board, no showdown, no ante.
pub const STARS_CASH_PREFLOP_FOLD: &str = "\
PokerStars Hand #105034215446:  Hold'em No Limit ($0.25/$0.50 USD) - 2013/10/04 19:53:27 CET [2013/10/04 13:53:27 ET]
Table 'Aase II' 6-max Seat #4 is the button
Seat 1: laxi23 ($51.89 in chips)
Seat 2: NikosMRF ($50 in chips)
Seat 3: Capricorn ($41.85 in chips)
Seat 4: Walkman ($46.63 in chips)
Seat 6: barly123 ($49.85 in chips)
barly123: posts small blind $0.25
laxi23: posts big blind $0.50
*** HOLE CARDS ***
Dealt to Walkman [Qc 4h]
NikosMRF: folds
Capricorn: raises $1 to $1.50
Walkman: folds
barly123: folds
laxi23: folds
Uncalled bet ($1) returned to Capricorn
Capricorn collected $1.25 from pot
Capricorn: doesn't show hand
*** SUMMARY ***
Total pot $1.25 | Rake $0
Seat 1: laxi23 (big blind) folded before Flop
Seat 2: NikosMRF folded before Flop (didn't bet)
Seat 3: Capricorn collected ($1.25)
Seat 4: Walkman (button) folded before Flop (didn't bet)
Seat 6: barly123 (small blind) folded before Flop
";

/// 9-max tournament with antes. Two players are all-in preflop, so the
/// flop, turn and river markers appear with no action lines.
pub const STARS_TOURNAMENT_ALLIN: &str = "\
PokerStars Hand #105024000105: Tournament #797469411, $3.19+$0.31 USD Hold'em No Limit - Level IV (50/100) - 2013/10/04 13:53:27 CET [2013/10/04 7:53:27 ET]
Table '797469411 15' 9-max Seat #1 is the button
Seat 1: flettl2 (3000 in chips)
Seat 2: santy312 (5000 in chips)
Seat 3: flavio766 (1500 in chips)
Seat 4: strongi82 (1500 in chips)
Seat 5: W2lkm2n (3000 in chips)
Seat 6: MISTRPerfect (1500 in chips)
Seat 7: blak_douglas (1500 in chips)
Seat 8: sinus91 (1500 in chips)
Seat 9: STBIJUJA (1500 in chips)
flettl2: posts the ante 10
santy312: posts the ante 10
flavio766: posts the ante 10
strongi82: posts the ante 10
W2lkm2n: posts the ante 10
MISTRPerfect: posts the ante 10
blak_douglas: posts the ante 10
sinus91: posts the ante 10
STBIJUJA: posts the ante 10
santy312: posts small blind 50
flavio766: posts big blind 100
*** HOLE CARDS ***
Dealt to W2lkm2n [Ac Jh]
strongi82: folds
W2lkm2n: raises 2890 to 2990 and is all-in
MISTRPerfect: folds
blak_douglas: folds
sinus91: folds
STBIJUJA: folds
flettl2: calls 2990 and is all-in
santy312: folds
flavio766: folds
*** FLOP *** [8h 4h Tc]
*** TURN *** [8h 4h Tc] [Kd]
*** RIVER *** [8h 4h Tc Kd] [7c]
*** SHOW DOWN ***
W2lkm2n: shows [Ac Jh] (high card Ace)
flettl2: shows [Js 9c] (a straight, Seven to Jack)
flettl2 collected 6220 from pot
*** SUMMARY ***
Total pot 6220 | Rake 0
Board [8h 4h Tc Kd 7c]
Seat 1: flettl2 (button) showed [Js 9c] and won (6220) with a straight, Seven to Jack
Seat 2: santy312 (small blind) folded before Flop
Seat 3: flavio766 (big blind) folded before Flop
Seat 4: strongi82 folded before Flop (didn't bet)
Seat 5: W2lkm2n showed [Ac Jh] and lost with high card Ace
Seat 6: MISTRPerfect folded before Flop (didn't bet)
Seat 7: blak_douglas folded before Flop (didn't bet)
Seat 8: sinus91 folded before Flop (didn't bet)
Seat 9: STBIJUJA folded before Flop (didn't bet)
";

/// PKR cash game; the table line has no size and seat 5 is empty.
pub const PKR_CASH_SHOWDOWN: &str = "\
Starting Hand #2433297728
Start time of hand: 5 Oct 2013 01:15:45
Last Hand #2433297369
Table: #52121155 - Rapanui's Leela [1299853]
Type: NO LIMIT HOLD'EM
Money Type: REAL MONEY
Blinds are now $0.25/$0.50
Button is at seat 3

Seated Players:
laxi23 - $51.89 - seat 1
NikosMRF - $50 - seat 2
Capricorn - $33.60 - seat 3
Walkman - $50 - seat 4
barly123 - $50.35 - seat 6

Moving Button to seat 3

Walkman posts small blind ($0.25)
barly123 posts big blind ($0.50)

Dealing pocket cards
Dealing to Walkman: [9s, 6d]
laxi23 folds
NikosMRF folds
Capricorn calls $0.50
Walkman folds
barly123 raises to $1.25
Capricorn calls $1.25
Dealing flop: [7d, 3c, Jd]
barly123 checks
Capricorn bets $1.37
barly123 raises to $4.11
Capricorn calls $4.11
Dealing turn: [Js]
barly123 checks
Capricorn checks
Dealing river: [5h]
barly123 checks
Capricorn checks
Showdown
barly123 shows: [Jh, Jc]
Capricorn mucks
barly123 wins $10.43

Summary:
Pot: $10.97 | Rake: $0.54
";

/// PKR cash game that ends preflop: no dealing lines, no showdown, and the
/// preflop block runs into the summary.
pub const PKR_CASH_PREFLOP_FOLD: &str = "\
Starting Hand #2433301250
Start time of hand: 5 Oct 2013 01:17:02
Last Hand #2433297728
Table: #52121155 - Rapanui's Leela [1299853]
Type: NO LIMIT HOLD'EM
Money Type: REAL MONEY
Blinds are now $0.25/$0.50
Button is at seat 4

Seated Players:
laxi23 - $51.89 - seat 1
NikosMRF - $50 - seat 2
Capricorn - $38.51 - seat 3
Walkman - $49.75 - seat 4
barly123 - $55.41 - seat 6

Moving Button to seat 4

barly123 posts small blind ($0.25)
laxi23 posts big blind ($0.50)

Dealing pocket cards
Dealing to Walkman: [Qc, 4h]
NikosMRF folds
Capricorn raises to $1.50
Walkman folds
barly123 folds
laxi23 folds
Capricorn wins $1.25

Summary:
Pot: $1.25 | Rake: $0
";
