use acstime::{CivilDateTime, EopRecord, EopTable, LeapSecondTable, TimeScaleConverter};

fn main() {
    let record = |mjd: u32, dut1_s: f64| EopRecord {
        mjd,
        polar_x_arcsec: 0.052,
        polar_y_arcsec: 0.351,
        dut1_s,
        lod_s: 0.0002,
        nutation_dx_arcsec: 0.0001,
        nutation_dy_arcsec: -0.0002,
    };
    let eop = EopTable::from_records(vec![
        record(59_662, -0.100_563_2),
        record(59_663, -0.100_185_2),
    ])
    .expect("valid EOP records");

    let converter = TimeScaleConverter::new(eop, LeapSecondTable::builtin());
    let civil = CivilDateTime::new(2022, 3, 24, 12, 0, 0.0).expect("valid civil time");

    let jd_utc = converter.utc_to_jd(&civil);
    let jd_ut1 = converter.utc_to_ut1(&civil).expect("EOP span covers epoch");
    let jd_tai = converter.utc_to_tai(&civil).expect("leap table covers epoch");
    let tt_s = converter.utc_to_tt_seconds(&civil).expect("conversion");

    println!("{civil}");
    println!("{jd_utc}");
    println!("{jd_ut1}");
    println!("{jd_tai}");
    println!("TT seconds from J2000: {tt_s}");
}
