use clap::Parser;
use loan_calculator::cli::{answer, run, Args};
use loan_calculator::error::LoanError;
use loan_calculator::loan::Outcome;
use std::io::{self, Write};
use test_log::test;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("loan-calculator").chain(argv.iter().copied())).unwrap()
}

fn output(argv: &[&str]) -> (bool, String) {
    let args = parse(argv);
    let mut out = Vec::new();
    let accepted = run(&args, &mut out).unwrap();
    (accepted, String::from_utf8(out).unwrap())
}

#[test]
fn annuity_payment() {
    let (accepted, text) = output(&[
        "--type=annuity",
        "--principal=1000000",
        "--periods=60",
        "--interest=10",
    ]);
    assert!(accepted);
    assert_eq!(text, "Your monthly payment = 21248!\nOverpayment = 274880\n");
}

#[test]
fn annuity_principal() {
    let (accepted, text) = output(&[
        "--type=annuity",
        "--payment=8721.8",
        "--periods=120",
        "--interest=5.6",
    ]);
    assert!(accepted);
    assert_eq!(text, "Your loan principal = 800000!\nOverpayment = 246615\n");
}

#[test]
fn annuity_periods() {
    let (accepted, text) = output(&[
        "--type=annuity",
        "--principal=500000",
        "--payment=23000",
        "--interest=7.8",
    ]);
    assert!(accepted);
    assert_eq!(
        text,
        "It will take 2 years to repay this loan!\nOverpayment = 52000\n"
    );

    let (_, text) = output(&[
        "--type=annuity",
        "--principal=1000000",
        "--payment=15000",
        "--interest=10",
    ]);
    assert_eq!(
        text,
        "It will take 8 years and 2 months to repay this loan!\nOverpayment = 470000\n"
    );
}

#[test]
fn differentiated_schedule() {
    let (accepted, text) = output(&[
        "--type=diff",
        "--principal=500000",
        "--periods=8",
        "--interest=7.8",
    ]);
    assert!(accepted);
    assert_eq!(
        text,
        "Month 1: payment is 65750\n\
         Month 2: payment is 65344\n\
         Month 3: payment is 64938\n\
         Month 4: payment is 64532\n\
         Month 5: payment is 64125\n\
         Month 6: payment is 63719\n\
         Month 7: payment is 63313\n\
         Month 8: payment is 62907\n\
         Overpayment = 14628\n"
    );
}

#[test]
fn incorrect_parameters() {
    for argv in [
        &["--type=diff", "--principal=-1000000", "--periods=10", "--interest=10"][..],
        &["--type=annuity", "--principal=1000000", "--periods=10", "--interest=0"],
        &["--type=balloon", "--principal=1000000", "--periods=10", "--interest=10"],
        &["--type=diff", "--principal=1000000", "--payment=104000", "--periods=8", "--interest=10"],
        &["--type=annuity", "--principal=100000", "--payment=10400", "--periods=8"],
        &["--type=annuity", "--principal=100000", "--payment=500", "--interest=12"],
        &["--principal=100000", "--payment=10400", "--periods=8", "--interest=10"],
    ] {
        let (accepted, text) = output(argv);
        assert!(!accepted, "{:?} should be rejected", argv);
        assert_eq!(text, "Incorrect parameters\n");
    }
}

#[test]
fn non_finite_results_are_incorrect_parameters() {
    for (argv, operation) in [
        (
            &["--type=annuity", "--principal=1000", "--periods=12", "--interest=1e-300"][..],
            "annuity factor",
        ),
        (
            &["--type=annuity", "--payment=100", "--periods=12", "--interest=1e-300"],
            "annuity factor",
        ),
        (
            &["--type=annuity", "--principal=inf", "--periods=12", "--interest=10"],
            "payment",
        ),
        (
            &["--type=annuity", "--principal=NaN", "--periods=12", "--interest=10"],
            "payment",
        ),
        (
            &["--type=annuity", "--payment=inf", "--periods=12", "--interest=10"],
            "principal",
        ),
        (
            &["--type=diff", "--principal=inf", "--periods=12", "--interest=10"],
            "differentiated payment",
        ),
    ] {
        assert_eq!(
            answer(&parse(argv)),
            Err(LoanError::NonFinite { operation }),
            "{:?}",
            argv
        );
        assert_eq!(output(argv), (false, "Incorrect parameters\n".to_string()));
    }
}

// accepts a fixed number of bytes, then refuses further writes
struct Capped {
    buf: Vec<u8>,
    cap: usize,
}

impl Write for Capped {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let room = self.cap - self.buf.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "output full"));
        }
        let n = data.len().min(room);
        self.buf.extend_from_slice(&data[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn differentiated_max_periods_streams() {
    let argv = [
        "--type=diff",
        "--principal=1000",
        "--periods=4294967295",
        "--interest=10",
    ];
    match answer(&parse(&argv)) {
        Ok(Outcome::Differentiated(schedule)) => {
            assert_eq!(schedule.periods(), u32::MAX);
            assert_eq!(schedule.principal(), 1000.);
        }
        other => panic!("unexpected answer {:?}", other),
    }

    let expected = "Month 1: payment is 9\nMonth 2: payment is 9\n";
    let mut out = Capped {
        buf: Vec::new(),
        cap: expected.len(),
    };
    assert!(run(&parse(&argv), &mut out).is_err());
    assert_eq!(String::from_utf8(out.buf).unwrap(), expected);
}
