//! Generated isotope mass table.
//!
//! Rows are `(atomic number, mass number, atomic mass in Dalton)`, sorted by
//! `(atomic number, mass number)`, from the NIST Atomic Weights and Isotopic
//! Compositions dataset. Regenerated offline; do not edit by hand.

#[rustfmt::skip]
pub(super) static ISOTOPES: &[(u8, u16, f64)] = &[
    (1, 2, 2.014101778120000),
    (1, 3, 3.016049277900000),
    (1, 4, 4.026430000000000),
    (1, 5, 5.035311000000000),
    (1, 6, 6.044960000000000),
    (1, 7, 7.052700000000000),
    (2, 3, 3.016029320100000),
    (2, 5, 5.012057000000000),
    (2, 6, 6.018885891000000),
    (2, 7, 7.027990700000000),
    (2, 8, 8.033934390000000),
    (2, 9, 9.043946000000000),
    (2, 10, 10.052790000000000),
    (3, 3, 3.030800000000000),
    (3, 4, 4.027190000000000),
    (3, 5, 5.012538000000000),
    (3, 6, 6.015122887400000),
    (3, 8, 8.022486246000000),
    (3, 9, 9.026790190000000),
    (3, 10, 10.035483000000000),
    (3, 11, 11.043723580000000),
    (3, 12, 12.052517000000000),
    (3, 13, 13.062630000000000),
    (4, 5, 5.039900000000000),
    (4, 6, 6.019726400000000),
    (4, 7, 7.016928717000000),
    (4, 8, 8.005305102000000),
    (4, 10, 10.013534695000000),
    (4, 11, 11.021661080000000),
    (4, 12, 12.026922100000000),
    (4, 13, 13.036135000000000),
    (4, 14, 14.042890000000000),
    (4, 15, 15.053420000000000),
    (4, 16, 16.061670000000000),
    (5, 6, 6.050800000000000),
    (5, 7, 7.029712000000000),
    (5, 8, 8.024607300000000),
    (5, 9, 9.013329650000000),
    (5, 10, 10.012936950000000),
    (5, 12, 12.014352700000000),
    (5, 13, 13.017780200000000),
    (5, 14, 14.025404000000000),
    (5, 15, 15.031088000000000),
    (5, 16, 16.039842000000000),
    (5, 17, 17.046990000000000),
    (5, 18, 18.055660000000000),
    (5, 19, 19.063100000000000),
    (5, 20, 20.072070000000000),
    (5, 21, 21.081290000000000),
    (6, 8, 8.037643000000000),
    (6, 9, 9.031037200000000),
    (6, 10, 10.016853310000000),
    (6, 11, 11.011433600000000),
    (6, 13, 13.003354835070000),
    (6, 14, 14.003241988400000),
    (6, 15, 15.010599260000000),
    (6, 16, 16.014701300000000),
    (6, 17, 17.022577000000000),
    (6, 18, 18.026751000000000),
    (6, 19, 19.034800000000000),
    (6, 20, 20.040320000000000),
    (6, 21, 21.049000000000000),
    (6, 22, 22.057530000000000),
    (6, 23, 23.068900000000000),
    (7, 10, 10.041650000000000),
    (7, 11, 11.026091000000000),
    (7, 12, 12.018613200000000),
    (7, 13, 13.005738610000000),
    (7, 15, 15.000108898880000),
    (7, 16, 16.006101900000000),
    (7, 17, 17.008449000000000),
    (7, 18, 18.014078000000000),
    (7, 19, 19.017022000000000),
    (7, 20, 20.023366000000000),
    (7, 21, 21.027110000000000),
    (7, 22, 22.034390000000000),
    (7, 23, 23.041140000000000),
    (7, 24, 24.050390000000000),
    (7, 25, 25.060100000000000),
    (8, 12, 12.034262000000000),
    (8, 13, 13.024815000000000),
    (8, 14, 14.008596360000000),
    (8, 15, 15.003065620000000),
    (8, 17, 16.999131756500000),
    (8, 18, 17.999159612860000),
    (8, 19, 19.003578000000000),
    (8, 20, 20.004075350000000),
    (8, 21, 21.008655000000000),
    (8, 22, 22.009966000000000),
    (8, 23, 23.015696000000000),
    (8, 24, 24.019860000000000),
    (8, 25, 25.029360000000000),
    (8, 26, 26.037290000000000),
    (8, 27, 27.047720000000000),
    (8, 28, 28.055910000000000),
    (9, 14, 14.034315000000000),
    (9, 15, 15.018043000000000),
    (9, 16, 16.011465700000000),
    (9, 17, 17.002095240000000),
    (9, 18, 18.000937330000000),
    (9, 20, 19.999981252000000),
    (9, 21, 20.999948900000000),
    (9, 22, 22.002999000000000),
    (9, 23, 23.003557000000000),
    (9, 24, 24.008115000000000),
    (9, 25, 25.012199000000000),
    (9, 26, 26.020038000000000),
    (9, 27, 27.026440000000000),
    (9, 28, 28.035340000000000),
    (9, 29, 29.042540000000000),
    (9, 30, 30.051650000000000),
    (9, 31, 31.059710000000000),
    (10, 16, 16.025750000000000),
    (10, 17, 17.017713960000000),
    (10, 18, 18.005708700000000),
    (10, 19, 19.001880910000000),
    (10, 21, 20.993846685000000),
    (10, 22, 21.991385114000000),
    (10, 23, 22.994466910000000),
    (10, 24, 23.993610650000000),
    (10, 25, 24.997789000000000),
    (10, 26, 26.000515000000000),
    (10, 27, 27.007553000000000),
    (10, 28, 28.012120000000000),
    (10, 29, 29.019750000000000),
    (10, 30, 30.024730000000000),
    (10, 31, 31.033100000000000),
    (10, 32, 32.039720000000000),
    (10, 33, 33.049380000000000),
    (10, 34, 34.056730000000000),
    (11, 18, 18.026880000000000),
    (11, 19, 19.013880000000000),
    (11, 20, 20.007354400000000),
    (11, 21, 20.997654690000000),
    (11, 22, 21.994437410000000),
    (11, 24, 23.990962950000000),
    (11, 25, 24.989954000000000),
    (11, 26, 25.992634600000000),
    (11, 27, 26.994076500000000),
    (11, 28, 27.998939000000000),
    (11, 29, 29.002877100000000),
    (11, 30, 30.009097900000000),
    (11, 31, 31.013163000000000),
    (11, 32, 32.020190000000000),
    (11, 33, 33.025730000000000),
    (11, 34, 34.033590000000000),
    (11, 35, 35.040620000000000),
    (11, 36, 36.049290000000000),
    (11, 37, 37.057050000000000),
    (12, 19, 19.034169000000000),
    (12, 20, 20.018850000000000),
    (12, 21, 21.011716000000000),
    (12, 22, 21.999570650000000),
    (12, 23, 22.994124210000000),
    (12, 25, 24.985836976000000),
    (12, 26, 25.982592968000000),
    (12, 27, 26.984340624000000),
    (12, 28, 27.983876700000000),
    (12, 29, 28.988617000000000),
    (12, 30, 29.990462900000000),
    (12, 31, 30.996648000000000),
    (12, 32, 31.999110200000000),
    (12, 33, 33.005327100000000),
    (12, 34, 34.008935000000000),
    (12, 35, 35.016790000000000),
    (12, 36, 36.021880000000000),
    (12, 37, 37.030370000000000),
    (12, 38, 38.036580000000000),
    (12, 39, 39.045380000000000),
    (12, 40, 40.052180000000000),
    (13, 21, 21.028970000000000),
    (13, 22, 22.019540000000000),
    (13, 23, 23.007244350000000),
    (13, 24, 23.999948900000000),
    (13, 25, 24.990428100000000),
    (13, 26, 25.986891904000000),
    (13, 28, 27.981910210000000),
    (13, 29, 28.980456500000000),
    (13, 30, 29.982960000000000),
    (13, 31, 30.983945000000000),
    (13, 32, 31.988085000000000),
    (13, 33, 32.990909000000000),
    (13, 34, 33.996705000000000),
    (13, 35, 34.999764000000000),
    (13, 36, 36.006390000000000),
    (13, 37, 37.010530000000000),
    (13, 38, 38.017400000000000),
    (13, 39, 39.022540000000000),
    (13, 40, 40.030030000000000),
    (13, 41, 41.036380000000000),
    (13, 42, 42.043840000000000),
    (13, 43, 43.051470000000000),
    (14, 22, 22.035790000000000),
    (14, 23, 23.025440000000000),
    (14, 24, 24.011535000000000),
    (14, 25, 25.004109000000000),
    (14, 26, 25.992333840000000),
    (14, 27, 26.986704810000000),
    (14, 29, 28.976494664900000),
    (14, 30, 29.973770136000000),
    (14, 31, 30.975363194000000),
    (14, 32, 31.974151540000000),
    (14, 33, 32.977976960000000),
    (14, 34, 33.978576000000000),
    (14, 35, 34.984583000000000),
    (14, 36, 35.986695000000000),
    (14, 37, 36.992921000000000),
    (14, 38, 37.995523000000000),
    (14, 39, 39.002491000000000),
    (14, 40, 40.005830000000000),
    (14, 41, 41.013010000000000),
    (14, 42, 42.017780000000000),
    (14, 43, 43.024800000000000),
    (14, 44, 44.030610000000000),
    (14, 45, 45.039950000000000),
    (15, 24, 24.035770000000000),
    (15, 25, 25.021190000000000),
    (15, 26, 26.011780000000000),
    (15, 27, 26.999224000000000),
    (15, 28, 27.992326600000000),
    (15, 29, 28.981800790000000),
    (15, 30, 29.978313750000000),
    (15, 32, 31.973907643000000),
    (15, 33, 32.971725700000000),
    (15, 34, 33.973645890000000),
    (15, 35, 34.973314100000000),
    (15, 36, 35.978260000000000),
    (15, 37, 36.979607000000000),
    (15, 38, 37.984252000000000),
    (15, 39, 38.986227000000000),
    (15, 40, 39.991330000000000),
    (15, 41, 40.994654000000000),
    (15, 42, 42.001080000000000),
    (15, 43, 43.005020000000000),
    (15, 44, 44.011210000000000),
    (15, 45, 45.016450000000000),
    (15, 46, 46.024460000000000),
    (15, 47, 47.031390000000000),
    (16, 26, 26.029070000000000),
    (16, 27, 27.018280000000000),
    (16, 28, 28.004370000000000),
    (16, 29, 28.996611000000000),
    (16, 30, 29.984907030000000),
    (16, 31, 30.979557010000000),
    (16, 33, 32.971458909800000),
    (16, 34, 33.967867004000000),
    (16, 35, 34.969032310000000),
    (16, 36, 35.967080710000000),
    (16, 37, 36.971125510000000),
    (16, 38, 37.971163300000000),
    (16, 39, 38.975134000000000),
    (16, 40, 39.975482600000000),
    (16, 41, 40.979593500000000),
    (16, 42, 41.981065100000000),
    (16, 43, 42.986907600000000),
    (16, 44, 43.990118800000000),
    (16, 45, 44.995720000000000),
    (16, 46, 46.000040000000000),
    (16, 47, 47.007950000000000),
    (16, 48, 48.013700000000000),
    (16, 49, 49.022760000000000),
    (17, 28, 28.029540000000000),
    (17, 29, 29.014780000000000),
    (17, 30, 30.004770000000000),
    (17, 31, 30.992414000000000),
    (17, 32, 31.985684640000000),
    (17, 33, 32.977451990000000),
    (17, 34, 33.973762485000000),
    (17, 36, 35.968306809000000),
    (17, 37, 36.965902602000000),
    (17, 38, 37.968010440000000),
    (17, 39, 38.968008200000000),
    (17, 40, 39.970415000000000),
    (17, 41, 40.970685000000000),
    (17, 42, 41.973250000000000),
    (17, 43, 42.973890000000000),
    (17, 44, 43.977870000000000),
    (17, 45, 44.980290000000000),
    (17, 46, 45.985170000000000),
    (17, 47, 46.989160000000000),
    (17, 48, 47.995640000000000),
    (17, 49, 49.001230000000000),
    (17, 50, 50.009050000000000),
    (17, 51, 51.015540000000000),
    (18, 30, 30.023070000000000),
    (18, 31, 31.012120000000000),
    (18, 32, 31.997637800000000),
    (18, 33, 32.989925550000000),
    (18, 34, 33.980270090000000),
    (18, 35, 34.975257590000000),
    (18, 36, 35.967545105000000),
    (18, 37, 36.966776330000000),
    (18, 38, 37.962732110000000),
    (18, 39, 38.964313000000000),
    (18, 41, 40.964500570000000),
    (18, 42, 41.963045700000000),
    (18, 43, 42.965636100000000),
    (18, 44, 43.964923800000000),
    (18, 45, 44.968039730000000),
    (18, 46, 45.968083000000000),
    (18, 47, 46.972935000000000),
    (18, 48, 47.975910000000000),
    (18, 49, 48.981900000000000),
    (18, 50, 49.986130000000000),
    (18, 51, 50.993700000000000),
    (18, 52, 51.998960000000000),
    (18, 53, 53.007290000000000),
    (19, 32, 32.022650000000000),
    (19, 33, 33.007560000000000),
    (19, 34, 33.998690000000000),
    (19, 35, 34.988005410000000),
    (19, 36, 35.981302010000000),
    (19, 37, 36.973375890000000),
    (19, 38, 37.969081120000000),
    (19, 40, 39.963998166000000),
    (19, 41, 40.961825257900000),
    (19, 42, 41.962402310000000),
    (19, 43, 42.960734700000000),
    (19, 44, 43.961586990000000),
    (19, 45, 44.960691490000000),
    (19, 46, 45.961981590000000),
    (19, 47, 46.961661600000000),
    (19, 48, 47.965341190000000),
    (19, 49, 48.968210750000000),
    (19, 50, 49.972380000000000),
    (19, 51, 50.975828000000000),
    (19, 52, 51.982240000000000),
    (19, 53, 52.987460000000000),
    (19, 54, 53.994630000000000),
    (19, 55, 55.000760000000000),
    (19, 56, 56.008510000000000),
    (20, 34, 34.014870000000000),
    (20, 35, 35.005140000000000),
    (20, 36, 35.993074000000000),
    (20, 37, 36.985897850000000),
    (20, 38, 37.976319220000000),
    (20, 39, 38.970710810000000),
    (20, 41, 40.962277920000000),
    (20, 42, 41.958617830000000),
    (20, 43, 42.958766440000000),
    (20, 44, 43.955481560000000),
    (20, 45, 44.956186350000000),
    (20, 46, 45.953689000000000),
    (20, 47, 46.954542400000000),
    (20, 48, 47.952522760000000),
    (20, 49, 48.955662740000000),
    (20, 50, 49.957499200000000),
    (20, 51, 50.960989000000000),
    (20, 52, 51.963217000000000),
    (20, 53, 52.969450000000000),
    (20, 54, 53.973400000000000),
    (20, 55, 54.980300000000000),
    (20, 56, 55.985080000000000),
    (20, 57, 56.992620000000000),
    (20, 58, 57.997940000000000),
    (21, 36, 36.016480000000000),
    (21, 37, 37.003740000000000),
    (21, 38, 37.995120000000000),
    (21, 39, 38.984785000000000),
    (21, 40, 39.977967300000000),
    (21, 41, 40.969251105000000),
    (21, 42, 41.965516530000000),
    (21, 43, 42.961150500000000),
    (21, 44, 43.959402900000000),
    (21, 46, 45.955168260000000),
    (21, 47, 46.952403700000000),
    (21, 48, 47.952223600000000),
    (21, 49, 48.950014600000000),
    (21, 50, 49.952176000000000),
    (21, 51, 50.953592000000000),
    (21, 52, 51.956880000000000),
    (21, 53, 52.959090000000000),
    (21, 54, 53.963930000000000),
    (21, 55, 54.967820000000000),
    (21, 56, 55.973450000000000),
    (21, 57, 56.977770000000000),
    (21, 58, 57.984030000000000),
    (21, 59, 58.988940000000000),
    (21, 60, 59.995650000000000),
    (21, 61, 61.001000000000000),
    (22, 38, 38.011450000000000),
    (22, 39, 39.002360000000000),
    (22, 40, 39.990500000000000),
    (22, 41, 40.983148000000000),
    (22, 42, 41.973049030000000),
    (22, 43, 42.968522500000000),
    (22, 44, 43.959689950000000),
    (22, 45, 44.958121980000000),
    (22, 46, 45.952627720000000),
    (22, 47, 46.951758790000000),
    (22, 49, 48.947865680000000),
    (22, 50, 49.944786890000000),
    (22, 51, 50.946610650000000),
    (22, 52, 51.946893000000000),
    (22, 53, 52.949730000000000),
    (22, 54, 53.951050000000000),
    (22, 55, 54.955270000000000),
    (22, 56, 55.957910000000000),
    (22, 57, 56.963640000000000),
    (22, 58, 57.966600000000000),
    (22, 59, 58.972470000000000),
    (22, 60, 59.976030000000000),
    (22, 61, 60.982450000000000),
    (22, 62, 61.986510000000000),
    (22, 63, 62.993750000000000),
    (23, 40, 40.012760000000000),
    (23, 41, 41.000210000000000),
    (23, 42, 41.991820000000000),
    (23, 43, 42.980766000000000),
    (23, 44, 43.974110000000000),
    (23, 45, 44.965774800000000),
    (23, 46, 45.960198780000000),
    (23, 47, 46.954904910000000),
    (23, 48, 47.952252200000000),
    (23, 49, 48.948511800000000),
    (23, 50, 49.947156010000000),
    (23, 52, 51.944773010000000),
    (23, 53, 52.944336700000000),
    (23, 54, 53.946439000000000),
    (23, 55, 54.947240000000000),
    (23, 56, 55.950480000000000),
    (23, 57, 56.952520000000000),
    (23, 58, 57.956720000000000),
    (23, 59, 58.959390000000000),
    (23, 60, 59.964310000000000),
    (23, 61, 60.967250000000000),
    (23, 62, 61.972650000000000),
    (23, 63, 62.976390000000000),
    (23, 64, 63.982640000000000),
    (23, 65, 64.987500000000000),
    (23, 66, 65.993980000000000),
    (24, 42, 42.006700000000000),
    (24, 43, 42.997530000000000),
    (24, 44, 43.985360000000000),
    (24, 45, 44.979050000000000),
    (24, 46, 45.968359000000000),
    (24, 47, 46.962897400000000),
    (24, 48, 47.954029100000000),
    (24, 49, 48.951333300000000),
    (24, 50, 49.946041830000000),
    (24, 51, 50.944765020000000),
    (24, 53, 52.940648150000000),
    (24, 54, 53.938879160000000),
    (24, 55, 54.940838430000000),
    (24, 56, 55.940653100000000),
    (24, 57, 56.943613000000000),
    (24, 58, 57.944350000000000),
    (24, 59, 58.948590000000000),
    (24, 60, 59.950080000000000),
    (24, 61, 60.954420000000000),
    (24, 62, 61.956100000000000),
    (24, 63, 62.961650000000000),
    (24, 64, 63.964080000000000),
    (24, 65, 64.969960000000000),
    (24, 66, 65.973660000000000),
    (24, 67, 66.980160000000000),
    (24, 68, 67.984030000000000),
    (25, 44, 44.007150000000000),
    (25, 45, 44.994490000000000),
    (25, 46, 45.986090000000000),
    (25, 47, 46.975775000000000),
    (25, 48, 47.968520000000000),
    (25, 49, 48.959595000000000),
    (25, 50, 49.954237780000000),
    (25, 51, 50.948208470000000),
    (25, 52, 51.945563900000000),
    (25, 53, 52.941288890000000),
    (25, 54, 53.940357600000000),
    (25, 56, 55.938903690000000),
    (25, 57, 56.938286100000000),
    (25, 58, 57.940066600000000),
    (25, 59, 58.940391100000000),
    (25, 60, 59.943136600000000),
    (25, 61, 60.944452500000000),
    (25, 62, 61.947950000000000),
    (25, 63, 62.949664700000000),
    (25, 64, 63.953849400000000),
    (25, 65, 64.956019800000000),
    (25, 66, 65.960547000000000),
    (25, 67, 66.964240000000000),
    (25, 68, 67.969620000000000),
    (25, 69, 68.973660000000000),
    (25, 70, 69.979370000000000),
    (25, 71, 70.983680000000000),
    (26, 45, 45.014420000000000),
    (26, 46, 46.000630000000000),
    (26, 47, 46.991850000000000),
    (26, 48, 47.980230000000000),
    (26, 49, 48.973429000000000),
    (26, 50, 49.962975000000000),
    (26, 51, 50.956841000000000),
    (26, 52, 51.948113100000000),
    (26, 53, 52.945306400000000),
    (26, 54, 53.939608990000000),
    (26, 55, 54.938291990000000),
    (26, 57, 56.935392840000000),
    (26, 58, 57.933274430000000),
    (26, 59, 58.934874340000000),
    (26, 60, 59.934071100000000),
    (26, 61, 60.936746200000000),
    (26, 62, 61.936791800000000),
    (26, 63, 62.940272700000000),
    (26, 64, 63.940987800000000),
    (26, 65, 64.945011500000000),
    (26, 66, 65.946250000000000),
    (26, 67, 66.950540000000000),
    (26, 68, 67.952950000000000),
    (26, 69, 68.958070000000000),
    (26, 70, 69.961020000000000),
    (26, 71, 70.966720000000000),
    (26, 72, 71.969830000000000),
    (26, 73, 72.975720000000000),
    (26, 74, 73.979350000000000),
    (27, 47, 47.010570000000000),
    (27, 48, 48.000930000000000),
    (27, 49, 48.988910000000000),
    (27, 50, 49.980910000000000),
    (27, 51, 50.970647000000000),
    (27, 52, 51.963510000000000),
    (27, 53, 52.954204100000000),
    (27, 54, 53.948459870000000),
    (27, 55, 54.941997200000000),
    (27, 56, 55.939838800000000),
    (27, 57, 56.936290570000000),
    (27, 58, 57.935752100000000),
    (27, 60, 59.933816300000000),
    (27, 61, 60.932476620000000),
    (27, 62, 61.934059000000000),
    (27, 63, 62.933600000000000),
    (27, 64, 63.935811000000000),
    (27, 65, 64.936462100000000),
    (27, 66, 65.939443000000000),
    (27, 67, 66.940609600000000),
    (27, 68, 67.944260000000000),
    (27, 69, 68.946140000000000),
    (27, 70, 69.949630000000000),
    (27, 71, 70.952370000000000),
    (27, 72, 71.957290000000000),
    (27, 73, 72.960390000000000),
    (27, 74, 73.965150000000000),
    (27, 75, 74.968760000000000),
    (27, 76, 75.974130000000000),
    (28, 48, 48.017690000000000),
    (28, 49, 49.007700000000000),
    (28, 50, 49.994740000000000),
    (28, 51, 50.986110000000000),
    (28, 52, 51.974800000000000),
    (28, 53, 52.968190000000000),
    (28, 54, 53.957892000000000),
    (28, 55, 54.951330630000000),
    (28, 56, 55.942128550000000),
    (28, 57, 56.939792180000000),
    (28, 58, 57.935342410000000),
    (28, 60, 59.930785880000000),
    (28, 61, 60.931055570000000),
    (28, 62, 61.928345370000000),
    (28, 63, 62.929669630000000),
    (28, 64, 63.927966820000000),
    (28, 65, 64.930085170000000),
    (28, 66, 65.929139300000000),
    (28, 67, 66.931569400000000),
    (28, 68, 67.931868800000000),
    (28, 69, 68.935610300000000),
    (28, 70, 69.936431300000000),
    (28, 71, 70.940519000000000),
    (28, 72, 71.941785900000000),
    (28, 73, 72.946206700000000),
    (28, 74, 73.947980000000000),
    (28, 75, 74.952500000000000),
    (28, 76, 75.955330000000000),
    (28, 77, 76.960550000000000),
    (28, 78, 77.963360000000000),
    (28, 79, 78.970250000000000),
    (29, 52, 51.996710000000000),
    (29, 53, 52.984590000000000),
    (29, 54, 53.976660000000000),
    (29, 55, 54.966040000000000),
    (29, 56, 55.958950000000000),
    (29, 57, 56.949212500000000),
    (29, 58, 57.944533050000000),
    (29, 59, 58.939497480000000),
    (29, 60, 59.937364500000000),
    (29, 61, 60.933457600000000),
    (29, 62, 61.932595410000000),
    (29, 63, 62.929597720000000),
    (29, 65, 64.927789700000000),
    (29, 66, 65.928869030000000),
    (29, 67, 66.927730300000000),
    (29, 68, 67.929610900000000),
    (29, 69, 68.929429300000000),
    (29, 70, 69.932392100000000),
    (29, 71, 70.932676800000000),
    (29, 72, 71.935820300000000),
    (29, 73, 72.936674400000000),
    (29, 74, 73.939874900000000),
    (29, 75, 74.941522600000000),
    (29, 76, 75.945275000000000),
    (29, 77, 76.947920000000000),
    (29, 78, 77.952230000000000),
    (29, 79, 78.955020000000000),
    (29, 80, 79.960890000000000),
    (29, 81, 80.965870000000000),
    (29, 82, 81.972440000000000),
    (30, 54, 53.992040000000000),
    (30, 55, 54.983980000000000),
    (30, 56, 55.972540000000000),
    (30, 57, 56.965060000000000),
    (30, 58, 57.954591000000000),
    (30, 59, 58.949312660000000),
    (30, 60, 59.941842100000000),
    (30, 61, 60.939507000000000),
    (30, 62, 61.934333970000000),
    (30, 63, 62.933211500000000),
    (30, 64, 63.929142010000000),
    (30, 66, 65.926033810000000),
    (30, 67, 66.927127750000000),
    (30, 68, 67.924844550000000),
    (30, 69, 68.926550700000000),
    (30, 70, 69.925319200000000),
    (30, 71, 70.927719600000000),
    (30, 72, 71.926842800000000),
    (30, 73, 72.929582600000000),
    (30, 74, 73.929407300000000),
    (30, 75, 74.932840200000000),
    (30, 76, 75.933115000000000),
    (30, 77, 76.936887200000000),
    (30, 78, 77.938289200000000),
    (30, 79, 78.942638100000000),
    (30, 80, 79.944552900000000),
    (30, 81, 80.950402600000000),
    (30, 82, 81.954260000000000),
    (30, 83, 82.960560000000000),
    (30, 84, 83.965210000000000),
    (30, 85, 84.972260000000000),
    (31, 56, 55.995360000000000),
    (31, 57, 56.983200000000000),
    (31, 58, 57.974780000000000),
    (31, 59, 58.963530000000000),
    (31, 60, 59.957290000000000),
    (31, 61, 60.949399000000000),
    (31, 62, 61.944190250000000),
    (31, 63, 62.939294200000000),
    (31, 64, 63.936840400000000),
    (31, 65, 64.932734590000000),
    (31, 66, 65.931589400000000),
    (31, 67, 66.928202500000000),
    (31, 68, 67.927980500000000),
    (31, 69, 68.925573500000000),
    (31, 71, 70.924702580000000),
    (31, 72, 71.926367470000000),
    (31, 73, 72.925174700000000),
    (31, 74, 73.926945700000000),
    (31, 75, 74.926500200000000),
    (31, 76, 75.928827600000000),
    (31, 77, 76.929154300000000),
    (31, 78, 77.931608800000000),
    (31, 79, 78.932852300000000),
    (31, 80, 79.936420800000000),
    (31, 81, 80.938133800000000),
    (31, 82, 81.943176500000000),
    (31, 83, 82.947120300000000),
    (31, 84, 83.952460000000000),
    (31, 85, 84.956990000000000),
    (31, 86, 85.963010000000000),
    (31, 87, 86.968240000000000),
    (32, 58, 57.991720000000000),
    (32, 59, 58.982490000000000),
    (32, 60, 59.970360000000000),
    (32, 61, 60.963790000000000),
    (32, 62, 61.955020000000000),
    (32, 63, 62.949628000000000),
    (32, 64, 63.941689900000000),
    (32, 65, 64.939368100000000),
    (32, 66, 65.933862100000000),
    (32, 67, 66.932733900000000),
    (32, 68, 67.928095300000000),
    (32, 69, 68.927964500000000),
    (32, 70, 69.924248750000000),
    (32, 71, 70.924952330000000),
    (32, 72, 71.922075826000000),
    (32, 74, 73.921177761000000),
    (32, 75, 74.922858370000000),
    (32, 76, 75.921402726000000),
    (32, 77, 76.923549843000000),
    (32, 78, 77.922852900000000),
    (32, 79, 78.925360000000000),
    (32, 80, 79.925350800000000),
    (32, 81, 80.928832900000000),
    (32, 82, 81.929774000000000),
    (32, 83, 82.934539100000000),
    (32, 84, 83.937575100000000),
    (32, 85, 84.942969700000000),
    (32, 86, 85.946580000000000),
    (32, 87, 86.952680000000000),
    (32, 88, 87.956910000000000),
    (32, 89, 88.963790000000000),
    (32, 90, 89.968630000000000),
    (33, 60, 59.993880000000000),
    (33, 61, 60.981120000000000),
    (33, 62, 61.973610000000000),
    (33, 63, 62.963900000000000),
    (33, 64, 63.957430000000000),
    (33, 65, 64.949611000000000),
    (33, 66, 65.944148800000000),
    (33, 67, 66.939251110000000),
    (33, 68, 67.936774100000000),
    (33, 69, 68.932246000000000),
    (33, 70, 69.930926000000000),
    (33, 71, 70.927113800000000),
    (33, 72, 71.926752300000000),
    (33, 73, 72.923829100000000),
    (33, 74, 73.923928600000000),
    (33, 76, 75.922392020000000),
    (33, 77, 76.920647600000000),
    (33, 78, 77.921828000000000),
    (33, 79, 78.920948400000000),
    (33, 80, 79.922474600000000),
    (33, 81, 80.922132300000000),
    (33, 82, 81.924741200000000),
    (33, 83, 82.925206900000000),
    (33, 84, 83.929303300000000),
    (33, 85, 84.932163700000000),
    (33, 86, 85.936701500000000),
    (33, 87, 86.940291700000000),
    (33, 88, 87.945550000000000),
    (33, 89, 88.949760000000000),
    (33, 90, 89.955630000000000),
    (33, 91, 90.960390000000000),
    (33, 92, 91.966740000000000),
    (34, 64, 63.971090000000000),
    (34, 65, 64.964400000000000),
    (34, 66, 65.955590000000000),
    (34, 67, 66.949994000000000),
    (34, 68, 67.941825240000000),
    (34, 69, 68.939414800000000),
    (34, 70, 69.933515500000000),
    (34, 71, 70.932209400000000),
    (34, 72, 71.927140500000000),
    (34, 73, 72.926754900000000),
    (34, 74, 73.922475934000000),
    (34, 75, 74.922522870000000),
    (34, 76, 75.919213704000000),
    (34, 77, 76.919914154000000),
    (34, 78, 77.917309280000000),
    (34, 80, 79.916521800000000),
    (34, 81, 80.917993000000000),
    (34, 82, 81.916699500000000),
    (34, 83, 82.919118600000000),
    (34, 84, 83.918466800000000),
    (34, 85, 84.922260800000000),
    (34, 86, 85.924311700000000),
    (34, 87, 86.928688600000000),
    (34, 88, 87.931417500000000),
    (34, 89, 88.936669100000000),
    (34, 90, 89.940100000000000),
    (34, 91, 90.945960000000000),
    (34, 92, 91.949840000000000),
    (34, 93, 92.956290000000000),
    (34, 94, 93.960490000000000),
    (34, 95, 94.967300000000000),
    (35, 67, 66.964650000000000),
    (35, 68, 67.958730000000000),
    (35, 69, 68.950497000000000),
    (35, 70, 69.944792000000000),
    (35, 71, 70.939342200000000),
    (35, 72, 71.936588600000000),
    (35, 73, 72.931671500000000),
    (35, 74, 73.929910200000000),
    (35, 75, 74.925810500000000),
    (35, 76, 75.924542000000000),
    (35, 77, 76.921379200000000),
    (35, 78, 77.921145900000000),
    (35, 79, 78.918337600000000),
    (35, 81, 80.916289700000000),
    (35, 82, 81.916803200000000),
    (35, 83, 82.915175600000000),
    (35, 84, 83.916496000000000),
    (35, 85, 84.915645800000000),
    (35, 86, 85.918805400000000),
    (35, 87, 86.920674000000000),
    (35, 88, 87.924083300000000),
    (35, 89, 88.926704600000000),
    (35, 90, 89.931292800000000),
    (35, 91, 90.934398600000000),
    (35, 92, 91.939631600000000),
    (35, 93, 92.943130000000000),
    (35, 94, 93.948900000000000),
    (35, 95, 94.953010000000000),
    (35, 96, 95.959030000000000),
    (35, 97, 96.963440000000000),
    (35, 98, 97.969460000000000),
    (36, 69, 68.965180000000000),
    (36, 70, 69.956040000000000),
    (36, 71, 70.950270000000000),
    (36, 72, 71.942092400000000),
    (36, 73, 72.939289200000000),
    (36, 74, 73.933084000000000),
    (36, 75, 74.930945700000000),
    (36, 76, 75.925910300000000),
    (36, 77, 76.924670000000000),
    (36, 78, 77.920364940000000),
    (36, 79, 78.920082900000000),
    (36, 80, 79.916378080000000),
    (36, 81, 80.916591200000000),
    (36, 82, 81.913482730000000),
    (36, 83, 82.914127160000000),
    (36, 85, 84.912527300000000),
    (36, 86, 85.910610626900000),
    (36, 87, 86.913354760000000),
    (36, 88, 87.914447900000000),
    (36, 89, 88.917835500000000),
    (36, 90, 89.919527900000000),
    (36, 91, 90.923806300000000),
    (36, 92, 91.926173100000000),
    (36, 93, 92.931147200000000),
    (36, 94, 93.934140000000000),
    (36, 95, 94.939711000000000),
    (36, 96, 95.943017000000000),
    (36, 97, 96.949090000000000),
    (36, 98, 97.952430000000000),
    (36, 99, 98.958390000000000),
    (36, 100, 99.962370000000000),
    (36, 101, 100.968730000000000),
    (37, 71, 70.965320000000000),
    (37, 72, 71.959080000000000),
    (37, 73, 72.950530000000000),
    (37, 74, 73.944265900000000),
    (37, 75, 74.938573200000000),
    (37, 76, 75.935073000000000),
    (37, 77, 76.930401600000000),
    (37, 78, 77.928141900000000),
    (37, 79, 78.923989900000000),
    (37, 80, 79.922516400000000),
    (37, 81, 80.918993900000000),
    (37, 82, 81.918209000000000),
    (37, 83, 82.915114200000000),
    (37, 84, 83.914375200000000),
    (37, 85, 84.911789737900000),
    (37, 87, 86.909180531000000),
    (37, 88, 87.911315590000000),
    (37, 89, 88.912278300000000),
    (37, 90, 89.914798500000000),
    (37, 91, 90.916537200000000),
    (37, 92, 91.919728400000000),
    (37, 93, 92.922039300000000),
    (37, 94, 93.926394800000000),
    (37, 95, 94.929260000000000),
    (37, 96, 95.934133400000000),
    (37, 97, 96.937177100000000),
    (37, 98, 97.941686900000000),
    (37, 99, 98.945030000000000),
    (37, 100, 99.950030000000000),
    (37, 101, 100.954040000000000),
    (37, 102, 101.959520000000000),
    (37, 103, 102.963920000000000),
    (38, 73, 72.965700000000000),
    (38, 74, 73.956170000000000),
    (38, 75, 74.949950000000000),
    (38, 76, 75.941763000000000),
    (38, 77, 76.937945500000000),
    (38, 78, 77.932180000000000),
    (38, 79, 78.929707700000000),
    (38, 80, 79.924517500000000),
    (38, 81, 80.923211400000000),
    (38, 82, 81.918399900000000),
    (38, 83, 82.917554400000000),
    (38, 84, 83.913419100000000),
    (38, 85, 84.912932000000000),
    (38, 86, 85.909260600000000),
    (38, 87, 86.908877500000000),
    (38, 89, 88.907451100000000),
    (38, 90, 89.907730000000000),
    (38, 91, 90.910195400000000),
    (38, 92, 91.911038200000000),
    (38, 93, 92.914024200000000),
    (38, 94, 93.915355600000000),
    (38, 95, 94.919352900000000),
    (38, 96, 95.921706600000000),
    (38, 97, 96.926374000000000),
    (38, 98, 97.928688800000000),
    (38, 99, 98.932890700000000),
    (38, 100, 99.935770000000000),
    (38, 101, 100.940352000000000),
    (38, 102, 101.943791000000000),
    (38, 103, 102.949090000000000),
    (38, 104, 103.952650000000000),
    (38, 105, 104.958550000000000),
    (38, 106, 105.962650000000000),
    (38, 107, 106.968970000000000),
    (39, 76, 75.958560000000000),
    (39, 77, 76.949781000000000),
    (39, 78, 77.943610000000000),
    (39, 79, 78.937350000000000),
    (39, 80, 79.934356100000000),
    (39, 81, 80.929455600000000),
    (39, 82, 81.926931400000000),
    (39, 83, 82.922485000000000),
    (39, 84, 83.920672100000000),
    (39, 85, 84.916433000000000),
    (39, 86, 85.914886000000000),
    (39, 87, 86.910876100000000),
    (39, 88, 87.909501600000000),
    (39, 90, 89.907143900000000),
    (39, 91, 90.907297400000000),
    (39, 92, 91.908945100000000),
    (39, 93, 92.909578000000000),
    (39, 94, 93.911590600000000),
    (39, 95, 94.912816100000000),
    (39, 96, 95.915896800000000),
    (39, 97, 96.918274100000000),
    (39, 98, 97.922382100000000),
    (39, 99, 98.924148000000000),
    (39, 100, 99.927715000000000),
    (39, 101, 100.930147700000000),
    (39, 102, 101.934327700000000),
    (39, 103, 102.937243000000000),
    (39, 104, 103.941960000000000),
    (39, 105, 104.945440000000000),
    (39, 106, 105.950560000000000),
    (39, 107, 106.954520000000000),
    (39, 108, 107.959960000000000),
    (39, 109, 108.964360000000000),
    (40, 78, 77.955660000000000),
    (40, 79, 78.949480000000000),
    (40, 80, 79.940400000000000),
    (40, 81, 80.937310000000000),
    (40, 82, 81.931350000000000),
    (40, 83, 82.929242100000000),
    (40, 84, 83.923326900000000),
    (40, 85, 84.921444400000000),
    (40, 86, 85.916297200000000),
    (40, 87, 86.914818000000000),
    (40, 88, 87.910221300000000),
    (40, 89, 88.908881400000000),
    (40, 90, 89.904697700000000),
    (40, 92, 91.905034700000000),
    (40, 93, 92.906469900000000),
    (40, 94, 93.906310800000000),
    (40, 95, 94.908038500000000),
    (40, 96, 95.908271400000000),
    (40, 97, 96.910951200000000),
    (40, 98, 97.912728900000000),
    (40, 99, 98.916667000000000),
    (40, 100, 99.918000600000000),
    (40, 101, 100.921448000000000),
    (40, 102, 101.923140900000000),
    (40, 103, 102.927191000000000),
    (40, 104, 103.929436000000000),
    (40, 105, 104.934008000000000),
    (40, 106, 105.936760000000000),
    (40, 107, 106.941740000000000),
    (40, 108, 107.944870000000000),
    (40, 109, 108.950410000000000),
    (40, 110, 109.953960000000000),
    (40, 111, 110.959680000000000),
    (40, 112, 111.963700000000000),
    (41, 81, 80.949600000000000),
    (41, 82, 81.943960000000000),
    (41, 83, 82.937290000000000),
    (41, 84, 83.934490000000000),
    (41, 85, 84.928845800000000),
    (41, 86, 85.925782800000000),
    (41, 87, 86.920693700000000),
    (41, 88, 87.918222000000000),
    (41, 89, 88.913445000000000),
    (41, 90, 89.911258400000000),
    (41, 91, 90.906989700000000),
    (41, 92, 91.907188100000000),
    (41, 94, 93.907278800000000),
    (41, 95, 94.906832400000000),
    (41, 96, 95.908097300000000),
    (41, 97, 96.908095900000000),
    (41, 98, 97.910326500000000),
    (41, 99, 98.911613000000000),
    (41, 100, 99.914327600000000),
    (41, 101, 100.915310300000000),
    (41, 102, 101.918077200000000),
    (41, 103, 102.919457200000000),
    (41, 104, 103.922892500000000),
    (41, 105, 104.924946500000000),
    (41, 106, 105.928931700000000),
    (41, 107, 106.931593700000000),
    (41, 108, 107.936074800000000),
    (41, 109, 108.939220000000000),
    (41, 110, 109.944030000000000),
    (41, 111, 110.947530000000000),
    (41, 112, 111.952470000000000),
    (41, 113, 112.956510000000000),
    (41, 114, 113.962010000000000),
    (41, 115, 114.966340000000000),
    (42, 83, 82.949880000000000),
    (42, 84, 83.941490000000000),
    (42, 85, 84.938261000000000),
    (42, 86, 85.931174800000000),
    (42, 87, 86.928196200000000),
    (42, 88, 87.921967800000000),
    (42, 89, 88.919468200000000),
    (42, 90, 89.913930900000000),
    (42, 91, 90.911745300000000),
    (42, 92, 91.906807960000000),
    (42, 93, 92.906809580000000),
    (42, 94, 93.905084900000000),
    (42, 95, 94.905838770000000),
    (42, 97, 96.906018120000000),
    (42, 98, 97.905404820000000),
    (42, 99, 98.907708510000000),
    (42, 100, 99.907471800000000),
    (42, 101, 100.910341400000000),
    (42, 102, 101.910283400000000),
    (42, 103, 102.913079000000000),
    (42, 104, 103.913734400000000),
    (42, 105, 104.916969000000000),
    (42, 106, 105.918259000000000),
    (42, 107, 106.922106000000000),
    (42, 108, 107.924033000000000),
    (42, 109, 108.928424000000000),
    (42, 110, 109.930704000000000),
    (42, 111, 110.935654000000000),
    (42, 112, 111.938310000000000),
    (42, 113, 112.943350000000000),
    (42, 114, 113.946530000000000),
    (42, 115, 114.951960000000000),
    (42, 116, 115.955450000000000),
    (42, 117, 116.961170000000000),
    (43, 85, 84.950580000000000),
    (43, 86, 85.944930000000000),
    (43, 87, 86.938067200000000),
    (43, 88, 87.933780000000000),
    (43, 89, 88.927648700000000),
    (43, 90, 89.924073900000000),
    (43, 91, 90.918425400000000),
    (43, 92, 91.915269800000000),
    (43, 93, 92.910246000000000),
    (43, 94, 93.909653600000000),
    (43, 95, 94.907653600000000),
    (43, 96, 95.907868000000000),
    (43, 97, 96.906366700000000),
    (43, 99, 98.906250800000000),
    (43, 100, 99.907653900000000),
    (43, 101, 100.907309000000000),
    (43, 102, 101.909209700000000),
    (43, 103, 102.909176000000000),
    (43, 104, 103.911425000000000),
    (43, 105, 104.911655000000000),
    (43, 106, 105.914358000000000),
    (43, 107, 106.915460600000000),
    (43, 108, 107.918495700000000),
    (43, 109, 108.920256000000000),
    (43, 110, 109.923744000000000),
    (43, 111, 110.925901000000000),
    (43, 112, 111.929945800000000),
    (43, 113, 112.932569000000000),
    (43, 114, 113.936910000000000),
    (43, 115, 114.939980000000000),
    (43, 116, 115.944760000000000),
    (43, 117, 116.948060000000000),
    (43, 118, 117.952990000000000),
    (43, 119, 118.956660000000000),
    (43, 120, 119.961870000000000),
    (44, 87, 86.950690000000000),
    (44, 88, 87.941600000000000),
    (44, 89, 88.937620000000000),
    (44, 90, 89.930344400000000),
    (44, 91, 90.926741900000000),
    (44, 92, 91.920234400000000),
    (44, 93, 92.917104400000000),
    (44, 94, 93.911342900000000),
    (44, 95, 94.910406000000000),
    (44, 96, 95.907590250000000),
    (44, 97, 96.907547100000000),
    (44, 98, 97.905286800000000),
    (44, 99, 98.905934100000000),
    (44, 100, 99.904214300000000),
    (44, 102, 101.904344100000000),
    (44, 103, 102.906318600000000),
    (44, 104, 103.905427500000000),
    (44, 105, 104.907747600000000),
    (44, 106, 105.907329100000000),
    (44, 107, 106.909972000000000),
    (44, 108, 107.910188000000000),
    (44, 109, 108.913326000000000),
    (44, 110, 109.914040700000000),
    (44, 111, 110.917570000000000),
    (44, 112, 111.918809000000000),
    (44, 113, 112.922844000000000),
    (44, 114, 113.924613600000000),
    (44, 115, 114.928820000000000),
    (44, 116, 115.931219200000000),
    (44, 117, 116.936100000000000),
    (44, 118, 117.938530000000000),
    (44, 119, 118.943570000000000),
    (44, 120, 119.946310000000000),
    (44, 121, 120.951640000000000),
    (44, 122, 121.954470000000000),
    (44, 123, 122.959890000000000),
    (44, 124, 123.963050000000000),
    (45, 89, 88.950580000000000),
    (45, 90, 89.944220000000000),
    (45, 91, 90.936880000000000),
    (45, 92, 91.932367700000000),
    (45, 93, 92.925912800000000),
    (45, 94, 93.921730500000000),
    (45, 95, 94.915897900000000),
    (45, 96, 95.914453000000000),
    (45, 97, 96.911329000000000),
    (45, 98, 97.910708000000000),
    (45, 99, 98.908128200000000),
    (45, 100, 99.908117000000000),
    (45, 101, 100.906160600000000),
    (45, 102, 101.906837400000000),
    (45, 104, 103.906649200000000),
    (45, 105, 104.905688500000000),
    (45, 106, 105.907286800000000),
    (45, 107, 106.906748000000000),
    (45, 108, 107.908714000000000),
    (45, 109, 108.908748800000000),
    (45, 110, 109.911079000000000),
    (45, 111, 110.911642300000000),
    (45, 112, 111.914403000000000),
    (45, 113, 112.915439300000000),
    (45, 114, 113.918718000000000),
    (45, 115, 114.920311600000000),
    (45, 116, 115.924059000000000),
    (45, 117, 116.926035400000000),
    (45, 118, 117.930340000000000),
    (45, 119, 118.932557000000000),
    (45, 120, 119.936860000000000),
    (45, 121, 120.939420000000000),
    (45, 122, 121.943990000000000),
    (45, 123, 122.946850000000000),
    (45, 124, 123.951510000000000),
    (45, 125, 124.954690000000000),
    (45, 126, 125.959460000000000),
    (46, 91, 90.950320000000000),
    (46, 92, 91.940880000000000),
    (46, 93, 92.936510000000000),
    (46, 94, 93.929037600000000),
    (46, 95, 94.924889800000000),
    (46, 96, 95.918215100000000),
    (46, 97, 96.916472000000000),
    (46, 98, 97.912698300000000),
    (46, 99, 98.911774800000000),
    (46, 100, 99.908505000000000),
    (46, 101, 100.908286400000000),
    (46, 102, 101.905602200000000),
    (46, 103, 102.906080900000000),
    (46, 104, 103.904030500000000),
    (46, 105, 104.905079600000000),
    (46, 106, 105.903480400000000),
    (46, 108, 107.903891600000000),
    (46, 109, 108.905950400000000),
    (46, 110, 109.905172200000000),
    (46, 111, 110.907689680000000),
    (46, 112, 111.907329700000000),
    (46, 113, 112.910261000000000),
    (46, 114, 113.910368600000000),
    (46, 115, 114.913659000000000),
    (46, 116, 115.914297000000000),
    (46, 117, 116.917954700000000),
    (46, 118, 117.919066700000000),
    (46, 119, 118.923340200000000),
    (46, 120, 119.924551100000000),
    (46, 121, 120.928950300000000),
    (46, 122, 121.930632000000000),
    (46, 123, 122.935140000000000),
    (46, 124, 123.937140000000000),
    (46, 125, 124.941790000000000),
    (46, 126, 125.944160000000000),
    (46, 127, 126.949070000000000),
    (46, 128, 127.951830000000000),
    (47, 93, 92.950330000000000),
    (47, 94, 93.943730000000000),
    (47, 95, 94.936020000000000),
    (47, 96, 95.930744000000000),
    (47, 97, 96.923970000000000),
    (47, 98, 97.921560000000000),
    (47, 99, 98.917645800000000),
    (47, 100, 99.916115400000000),
    (47, 101, 100.912684000000000),
    (47, 102, 101.911704700000000),
    (47, 103, 102.908963100000000),
    (47, 104, 103.908623900000000),
    (47, 105, 104.906525600000000),
    (47, 106, 105.906663600000000),
    (47, 107, 106.905091600000000),
    (47, 109, 108.904755300000000),
    (47, 110, 109.906110200000000),
    (47, 111, 110.905295900000000),
    (47, 112, 111.907048600000000),
    (47, 113, 112.906573000000000),
    (47, 114, 113.908823000000000),
    (47, 115, 114.908767000000000),
    (47, 116, 115.911386800000000),
    (47, 117, 116.911774000000000),
    (47, 118, 117.914595500000000),
    (47, 119, 118.915570000000000),
    (47, 120, 119.918784800000000),
    (47, 121, 120.920125000000000),
    (47, 122, 121.923664000000000),
    (47, 123, 122.925337000000000),
    (47, 124, 123.928930000000000),
    (47, 125, 124.931050000000000),
    (47, 126, 125.934750000000000),
    (47, 127, 126.937110000000000),
    (47, 128, 127.941060000000000),
    (47, 129, 128.943950000000000),
    (47, 130, 129.950700000000000),
    (48, 95, 94.949940000000000),
    (48, 96, 95.940340000000000),
    (48, 97, 96.935100000000000),
    (48, 98, 97.927389000000000),
    (48, 99, 98.924925800000000),
    (48, 100, 99.920348800000000),
    (48, 101, 100.918586200000000),
    (48, 102, 101.914482000000000),
    (48, 103, 102.913416500000000),
    (48, 104, 103.909856400000000),
    (48, 105, 104.909463900000000),
    (48, 106, 105.906459900000000),
    (48, 107, 106.906612100000000),
    (48, 108, 107.904183400000000),
    (48, 109, 108.904986700000000),
    (48, 110, 109.903006610000000),
    (48, 111, 110.904182870000000),
    (48, 112, 111.902762870000000),
    (48, 113, 112.904408130000000),
    (48, 114, 113.903365090000000),
    (48, 115, 114.905437510000000),
    (48, 116, 115.904763150000000),
    (48, 117, 116.907226000000000),
    (48, 118, 117.906922000000000),
    (48, 119, 118.909847000000000),
    (48, 120, 119.909868100000000),
    (48, 121, 120.912963700000000),
    (48, 122, 121.913459100000000),
    (48, 123, 122.916892500000000),
    (48, 124, 123.917657400000000),
    (48, 125, 124.921257600000000),
    (48, 126, 125.922429100000000),
    (48, 127, 126.926472000000000),
    (48, 128, 127.927812900000000),
    (48, 129, 128.931820000000000),
    (48, 130, 129.933940000000000),
    (48, 131, 130.940600000000000),
    (48, 132, 131.946040000000000),
    (48, 133, 132.952850000000000),
    (49, 97, 96.949340000000000),
    (49, 98, 97.942140000000000),
    (49, 99, 98.934110000000000),
    (49, 100, 99.930960000000000),
    (49, 101, 100.926340000000000),
    (49, 102, 101.924107100000000),
    (49, 103, 102.919881900000000),
    (49, 104, 103.918214500000000),
    (49, 105, 104.914502000000000),
    (49, 106, 105.913464000000000),
    (49, 107, 106.910290000000000),
    (49, 108, 107.909693500000000),
    (49, 109, 108.907151400000000),
    (49, 110, 109.907170000000000),
    (49, 111, 110.905108500000000),
    (49, 112, 111.905537700000000),
    (49, 113, 112.904061840000000),
    (49, 114, 113.904917910000000),
    (49, 116, 115.905259990000000),
    (49, 117, 116.904515700000000),
    (49, 118, 117.906356600000000),
    (49, 119, 118.905850700000000),
    (49, 120, 119.907967000000000),
    (49, 121, 120.907851000000000),
    (49, 122, 121.910281000000000),
    (49, 123, 122.910434000000000),
    (49, 124, 123.913182000000000),
    (49, 125, 124.913605000000000),
    (49, 126, 125.916507000000000),
    (49, 127, 126.917446000000000),
    (49, 128, 127.920400000000000),
    (49, 129, 128.921805300000000),
    (49, 130, 129.924977000000000),
    (49, 131, 130.926971500000000),
    (49, 132, 131.933001000000000),
    (49, 133, 132.938310000000000),
    (49, 134, 133.944540000000000),
    (49, 135, 134.950050000000000),
    (50, 99, 98.948530000000000),
    (50, 100, 99.938500000000000),
    (50, 101, 100.935260000000000),
    (50, 102, 101.930290000000000),
    (50, 103, 102.928105000000000),
    (50, 104, 103.923105200000000),
    (50, 105, 104.921268400000000),
    (50, 106, 105.916957400000000),
    (50, 107, 106.915713700000000),
    (50, 108, 107.911894300000000),
    (50, 109, 108.911292100000000),
    (50, 110, 109.907845000000000),
    (50, 111, 110.907740100000000),
    (50, 112, 111.904823870000000),
    (50, 113, 112.905175700000000),
    (50, 114, 113.902782700000000),
    (50, 115, 114.903344699000000),
    (50, 116, 115.901742800000000),
    (50, 117, 116.902953980000000),
    (50, 118, 117.901606570000000),
    (50, 120, 119.902201630000000),
    (50, 121, 120.904242600000000),
    (50, 122, 121.903443800000000),
    (50, 123, 122.905725200000000),
    (50, 124, 123.905276600000000),
    (50, 125, 124.907786400000000),
    (50, 126, 125.907659000000000),
    (50, 127, 126.910390000000000),
    (50, 128, 127.910507000000000),
    (50, 129, 128.913465000000000),
    (50, 130, 129.913973800000000),
    (50, 131, 130.917045000000000),
    (50, 132, 131.917826700000000),
    (50, 133, 132.923913400000000),
    (50, 134, 133.928682100000000),
    (50, 135, 134.934908600000000),
    (50, 136, 135.939990000000000),
    (50, 137, 136.946550000000000),
    (50, 138, 137.951840000000000),
    (51, 103, 102.939690000000000),
    (51, 104, 103.936480000000000),
    (51, 105, 104.931276000000000),
    (51, 106, 105.928638000000000),
    (51, 107, 106.924150600000000),
    (51, 108, 107.922226700000000),
    (51, 109, 108.918141100000000),
    (51, 110, 109.916854300000000),
    (51, 111, 110.913218200000000),
    (51, 112, 111.912400000000000),
    (51, 113, 112.909375000000000),
    (51, 114, 113.909290000000000),
    (51, 115, 114.906598000000000),
    (51, 116, 115.906793100000000),
    (51, 117, 116.904841500000000),
    (51, 118, 117.905532100000000),
    (51, 119, 118.903945500000000),
    (51, 120, 119.905079400000000),
    (51, 121, 120.903812000000000),
    (51, 123, 122.904213200000000),
    (51, 124, 123.905935000000000),
    (51, 125, 124.905253000000000),
    (51, 126, 125.907253000000000),
    (51, 127, 126.906924300000000),
    (51, 128, 127.909146000000000),
    (51, 129, 128.909147000000000),
    (51, 130, 129.911662000000000),
    (51, 131, 130.911988800000000),
    (51, 132, 131.914507700000000),
    (51, 133, 132.915273200000000),
    (51, 134, 133.920535700000000),
    (51, 135, 134.925185100000000),
    (51, 136, 135.930745900000000),
    (51, 137, 136.935550000000000),
    (51, 138, 137.941450000000000),
    (51, 139, 138.946550000000000),
    (51, 140, 139.952830000000000),
    (52, 105, 104.943300000000000),
    (52, 106, 105.937500000000000),
    (52, 107, 106.935012000000000),
    (52, 108, 107.929380500000000),
    (52, 109, 108.927304500000000),
    (52, 110, 109.922458100000000),
    (52, 111, 110.921000600000000),
    (52, 112, 111.916727900000000),
    (52, 113, 112.915891000000000),
    (52, 114, 113.912089000000000),
    (52, 115, 114.911902000000000),
    (52, 116, 115.908460000000000),
    (52, 117, 116.908646000000000),
    (52, 118, 117.905854000000000),
    (52, 119, 118.906407100000000),
    (52, 120, 119.904059300000000),
    (52, 121, 120.904944000000000),
    (52, 122, 121.903043500000000),
    (52, 123, 122.904269800000000),
    (52, 124, 123.902817100000000),
    (52, 125, 124.904429900000000),
    (52, 126, 125.903310900000000),
    (52, 127, 126.905225700000000),
    (52, 129, 128.906596460000000),
    (52, 130, 129.906222748000000),
    (52, 131, 130.908522213000000),
    (52, 132, 131.908546700000000),
    (52, 133, 132.910968800000000),
    (52, 134, 133.911394000000000),
    (52, 135, 134.916555700000000),
    (52, 136, 135.920100600000000),
    (52, 137, 136.925598900000000),
    (52, 138, 137.929472200000000),
    (52, 139, 138.935367200000000),
    (52, 140, 139.939499000000000),
    (52, 141, 140.945800000000000),
    (52, 142, 141.950220000000000),
    (52, 143, 142.956760000000000),
    (53, 107, 106.946780000000000),
    (53, 108, 107.943480000000000),
    (53, 109, 108.938085300000000),
    (53, 110, 109.935089000000000),
    (53, 111, 110.930269200000000),
    (53, 112, 111.928005000000000),
    (53, 113, 112.923650100000000),
    (53, 114, 113.921850000000000),
    (53, 115, 114.918048000000000),
    (53, 116, 115.916810000000000),
    (53, 117, 116.913648000000000),
    (53, 118, 117.913074000000000),
    (53, 119, 118.910074000000000),
    (53, 120, 119.910087000000000),
    (53, 121, 120.907405100000000),
    (53, 122, 121.907588800000000),
    (53, 123, 122.905588500000000),
    (53, 124, 123.906209000000000),
    (53, 125, 124.904629400000000),
    (53, 126, 125.905623300000000),
    (53, 128, 127.905808600000000),
    (53, 129, 128.904983700000000),
    (53, 130, 129.906670200000000),
    (53, 131, 130.906126300000000),
    (53, 132, 131.907993500000000),
    (53, 133, 132.907797000000000),
    (53, 134, 133.909758800000000),
    (53, 135, 134.910048800000000),
    (53, 136, 135.914604000000000),
    (53, 137, 136.918028200000000),
    (53, 138, 137.922726400000000),
    (53, 139, 138.926506000000000),
    (53, 140, 139.931730000000000),
    (53, 141, 140.935690000000000),
    (53, 142, 141.941200000000000),
    (53, 143, 142.945650000000000),
    (53, 144, 143.951390000000000),
    (53, 145, 144.956050000000000),
    (54, 109, 108.950430000000000),
    (54, 110, 109.944260000000000),
    (54, 111, 110.941607000000000),
    (54, 112, 111.935559000000000),
    (54, 113, 112.933221700000000),
    (54, 114, 113.927980000000000),
    (54, 115, 114.926294000000000),
    (54, 116, 115.921581000000000),
    (54, 117, 116.920359000000000),
    (54, 118, 117.916179000000000),
    (54, 119, 118.915411000000000),
    (54, 120, 119.911784000000000),
    (54, 121, 120.911453000000000),
    (54, 122, 121.908368000000000),
    (54, 123, 122.908482000000000),
    (54, 124, 123.905892000000000),
    (54, 125, 124.906394400000000),
    (54, 126, 125.904298300000000),
    (54, 127, 126.905182900000000),
    (54, 128, 127.903531000000000),
    (54, 129, 128.904780861100000),
    (54, 130, 129.903509349000000),
    (54, 132, 131.904155085600000),
    (54, 133, 132.905910800000000),
    (54, 134, 133.905394660000000),
    (54, 135, 134.907227800000000),
    (54, 136, 135.907214484000000),
    (54, 137, 136.911557780000000),
    (54, 138, 137.914146300000000),
    (54, 139, 138.918792200000000),
    (54, 140, 139.921645800000000),
    (54, 141, 140.926787200000000),
    (54, 142, 141.929973100000000),
    (54, 143, 142.935369600000000),
    (54, 144, 143.938945100000000),
    (54, 145, 144.944720000000000),
    (54, 146, 145.948518000000000),
    (54, 147, 146.954260000000000),
    (54, 148, 147.958130000000000),
    (55, 112, 111.950309000000000),
    (55, 113, 112.944429100000000),
    (55, 114, 113.941296000000000),
    (55, 115, 114.935910000000000),
    (55, 116, 115.933370000000000),
    (55, 117, 116.928617000000000),
    (55, 118, 117.926560000000000),
    (55, 119, 118.922377000000000),
    (55, 120, 119.920677000000000),
    (55, 121, 120.917227000000000),
    (55, 122, 121.916108000000000),
    (55, 123, 122.912996000000000),
    (55, 124, 123.912257800000000),
    (55, 125, 124.909728000000000),
    (55, 126, 125.909446000000000),
    (55, 127, 126.907417400000000),
    (55, 128, 127.907748700000000),
    (55, 129, 128.906065700000000),
    (55, 130, 129.906709300000000),
    (55, 131, 130.905464900000000),
    (55, 132, 131.906433900000000),
    (55, 134, 133.906718503000000),
    (55, 135, 134.905977000000000),
    (55, 136, 135.907311400000000),
    (55, 137, 136.907089230000000),
    (55, 138, 137.911017100000000),
    (55, 139, 138.913363800000000),
    (55, 140, 139.917283100000000),
    (55, 141, 140.920045500000000),
    (55, 142, 141.924296000000000),
    (55, 143, 142.927349000000000),
    (55, 144, 143.932076000000000),
    (55, 145, 144.935527000000000),
    (55, 146, 145.940344000000000),
    (55, 147, 146.944156000000000),
    (55, 148, 147.949230000000000),
    (55, 149, 148.953020000000000),
    (55, 150, 149.958330000000000),
    (55, 151, 150.962580000000000),
    (56, 114, 113.950660000000000),
    (56, 115, 114.947370000000000),
    (56, 116, 115.941280000000000),
    (56, 117, 116.938140000000000),
    (56, 118, 117.933060000000000),
    (56, 119, 118.930660000000000),
    (56, 120, 119.926050000000000),
    (56, 121, 120.924050000000000),
    (56, 122, 121.919904000000000),
    (56, 123, 122.918781000000000),
    (56, 124, 123.915094000000000),
    (56, 125, 124.914472000000000),
    (56, 126, 125.911250000000000),
    (56, 127, 126.911091000000000),
    (56, 128, 127.908342000000000),
    (56, 129, 128.908681000000000),
    (56, 130, 129.906320700000000),
    (56, 131, 130.906941000000000),
    (56, 132, 131.905061100000000),
    (56, 133, 132.906007400000000),
    (56, 134, 133.904508180000000),
    (56, 135, 134.905688380000000),
    (56, 136, 135.904575730000000),
    (56, 138, 137.905247000000000),
    (56, 139, 138.908841100000000),
    (56, 140, 139.910605700000000),
    (56, 141, 140.914403300000000),
    (56, 142, 141.916432400000000),
    (56, 143, 142.920625300000000),
    (56, 144, 143.922954900000000),
    (56, 145, 144.927518400000000),
    (56, 146, 145.930284000000000),
    (56, 147, 146.935304000000000),
    (56, 148, 147.938171000000000),
    (56, 149, 148.943080000000000),
    (56, 150, 149.946050000000000),
    (56, 151, 150.951270000000000),
    (56, 152, 151.954810000000000),
    (56, 153, 152.960360000000000),
    (57, 116, 115.956300000000000),
    (57, 117, 116.949990000000000),
    (57, 118, 117.946730000000000),
    (57, 119, 118.940990000000000),
    (57, 120, 119.938070000000000),
    (57, 121, 120.933150000000000),
    (57, 122, 121.930710000000000),
    (57, 123, 122.926300000000000),
    (57, 124, 123.924574000000000),
    (57, 125, 124.920816000000000),
    (57, 126, 125.919513000000000),
    (57, 127, 126.916375000000000),
    (57, 128, 127.915592000000000),
    (57, 129, 128.912694000000000),
    (57, 130, 129.912369000000000),
    (57, 131, 130.910070000000000),
    (57, 132, 131.910119000000000),
    (57, 133, 132.908218000000000),
    (57, 134, 133.908514000000000),
    (57, 135, 134.906984000000000),
    (57, 136, 135.907635000000000),
    (57, 137, 136.906450400000000),
    (57, 138, 137.907114900000000),
    (57, 140, 139.909480600000000),
    (57, 141, 140.910966000000000),
    (57, 142, 141.914090900000000),
    (57, 143, 142.916079500000000),
    (57, 144, 143.919646000000000),
    (57, 145, 144.921808000000000),
    (57, 146, 145.925875000000000),
    (57, 147, 146.928418000000000),
    (57, 148, 147.932679000000000),
    (57, 149, 148.935350000000000),
    (57, 150, 149.939470000000000),
    (57, 151, 150.942320000000000),
    (57, 152, 151.946820000000000),
    (57, 153, 152.950360000000000),
    (57, 154, 153.955170000000000),
    (57, 155, 154.959010000000000),
    (58, 119, 118.952710000000000),
    (58, 120, 119.946540000000000),
    (58, 121, 120.943350000000000),
    (58, 122, 121.937870000000000),
    (58, 123, 122.935280000000000),
    (58, 124, 123.930310000000000),
    (58, 125, 124.928440000000000),
    (58, 126, 125.923971000000000),
    (58, 127, 126.922727000000000),
    (58, 128, 127.918911000000000),
    (58, 129, 128.918102000000000),
    (58, 130, 129.914736000000000),
    (58, 131, 130.914429000000000),
    (58, 132, 131.911464000000000),
    (58, 133, 132.911520000000000),
    (58, 134, 133.908928000000000),
    (58, 135, 134.909161000000000),
    (58, 136, 135.907129210000000),
    (58, 137, 136.907762360000000),
    (58, 138, 137.905991000000000),
    (58, 139, 138.906655100000000),
    (58, 141, 140.908280700000000),
    (58, 142, 141.909250400000000),
    (58, 143, 142.912392100000000),
    (58, 144, 143.913652900000000),
    (58, 145, 144.917265000000000),
    (58, 146, 145.918802000000000),
    (58, 147, 146.922689900000000),
    (58, 148, 147.924424000000000),
    (58, 149, 148.928427000000000),
    (58, 150, 149.930384000000000),
    (58, 151, 150.934272000000000),
    (58, 152, 151.936600000000000),
    (58, 153, 152.940930000000000),
    (58, 154, 153.943800000000000),
    (58, 155, 154.948550000000000),
    (58, 156, 155.951830000000000),
    (58, 157, 156.957050000000000),
    (59, 121, 120.955320000000000),
    (59, 122, 121.951750000000000),
    (59, 123, 122.945960000000000),
    (59, 124, 123.942940000000000),
    (59, 125, 124.937700000000000),
    (59, 126, 125.935240000000000),
    (59, 127, 126.930710000000000),
    (59, 128, 127.928791000000000),
    (59, 129, 128.925095000000000),
    (59, 130, 129.923590000000000),
    (59, 131, 130.920235000000000),
    (59, 132, 131.919255000000000),
    (59, 133, 132.916331000000000),
    (59, 134, 133.915697000000000),
    (59, 135, 134.913112000000000),
    (59, 136, 135.912677000000000),
    (59, 137, 136.910679200000000),
    (59, 138, 137.910754000000000),
    (59, 139, 138.908940800000000),
    (59, 140, 139.909080300000000),
    (59, 142, 141.910049600000000),
    (59, 143, 142.910822800000000),
    (59, 144, 143.913310900000000),
    (59, 145, 144.914518200000000),
    (59, 146, 145.917680000000000),
    (59, 147, 146.919008000000000),
    (59, 148, 147.922130000000000),
    (59, 149, 148.923736000000000),
    (59, 150, 149.926676500000000),
    (59, 151, 150.928309000000000),
    (59, 152, 151.931553000000000),
    (59, 153, 152.933904000000000),
    (59, 154, 153.937530000000000),
    (59, 155, 154.940509000000000),
    (59, 156, 155.944640000000000),
    (59, 157, 156.947890000000000),
    (59, 158, 157.952410000000000),
    (59, 159, 158.955890000000000),
    (60, 124, 123.952200000000000),
    (60, 125, 124.948900000000000),
    (60, 126, 125.943110000000000),
    (60, 127, 126.940380000000000),
    (60, 128, 127.935250000000000),
    (60, 129, 128.933100000000000),
    (60, 130, 129.928506000000000),
    (60, 131, 130.927248000000000),
    (60, 132, 131.923321000000000),
    (60, 133, 132.922348000000000),
    (60, 134, 133.918790000000000),
    (60, 135, 134.918181000000000),
    (60, 136, 135.914976000000000),
    (60, 137, 136.914562000000000),
    (60, 138, 137.911950000000000),
    (60, 139, 138.911954000000000),
    (60, 140, 139.909550000000000),
    (60, 141, 140.909614700000000),
    (60, 142, 141.907729000000000),
    (60, 143, 142.909820000000000),
    (60, 145, 144.912579300000000),
    (60, 146, 145.913122600000000),
    (60, 147, 146.916106100000000),
    (60, 148, 147.916899300000000),
    (60, 149, 148.920154800000000),
    (60, 150, 149.920902200000000),
    (60, 151, 150.923840300000000),
    (60, 152, 151.924692000000000),
    (60, 153, 152.927718000000000),
    (60, 154, 153.929480000000000),
    (60, 155, 154.933135700000000),
    (60, 156, 155.935080000000000),
    (60, 157, 156.939386000000000),
    (60, 158, 157.941970000000000),
    (60, 159, 158.946530000000000),
    (60, 160, 159.949400000000000),
    (60, 161, 160.954280000000000),
    (61, 126, 125.957920000000000),
    (61, 127, 126.951920000000000),
    (61, 128, 127.948700000000000),
    (61, 129, 128.943230000000000),
    (61, 130, 129.940530000000000),
    (61, 131, 130.935670000000000),
    (61, 132, 131.933840000000000),
    (61, 133, 132.929782000000000),
    (61, 134, 133.928353000000000),
    (61, 135, 134.924823000000000),
    (61, 136, 135.923585000000000),
    (61, 137, 136.920480000000000),
    (61, 138, 137.919548000000000),
    (61, 139, 138.916800000000000),
    (61, 140, 139.916040000000000),
    (61, 141, 140.913555000000000),
    (61, 142, 141.912890000000000),
    (61, 143, 142.910938300000000),
    (61, 144, 143.912596400000000),
    (61, 146, 145.914702400000000),
    (61, 147, 146.915145000000000),
    (61, 148, 147.917481900000000),
    (61, 149, 148.918342300000000),
    (61, 150, 149.920991000000000),
    (61, 151, 150.921217500000000),
    (61, 152, 151.923506000000000),
    (61, 153, 152.924156700000000),
    (61, 154, 153.926472000000000),
    (61, 155, 154.928137000000000),
    (61, 156, 155.931117500000000),
    (61, 157, 156.933121400000000),
    (61, 158, 157.936565000000000),
    (61, 159, 158.939287000000000),
    (61, 160, 159.943100000000000),
    (61, 161, 160.946070000000000),
    (61, 162, 161.950220000000000),
    (61, 163, 162.953570000000000),
    (62, 128, 127.958420000000000),
    (62, 129, 128.954760000000000),
    (62, 130, 129.949000000000000),
    (62, 131, 130.946180000000000),
    (62, 132, 131.940870000000000),
    (62, 133, 132.938560000000000),
    (62, 134, 133.934110000000000),
    (62, 135, 134.932520000000000),
    (62, 136, 135.928276000000000),
    (62, 137, 136.926971000000000),
    (62, 138, 137.923244000000000),
    (62, 139, 138.922297000000000),
    (62, 140, 139.918995000000000),
    (62, 141, 140.918481600000000),
    (62, 142, 141.915204400000000),
    (62, 143, 142.914635300000000),
    (62, 144, 143.912006500000000),
    (62, 145, 144.913417300000000),
    (62, 146, 145.913047000000000),
    (62, 147, 146.914904400000000),
    (62, 148, 147.914829200000000),
    (62, 149, 148.917192100000000),
    (62, 151, 150.919939800000000),
    (62, 152, 151.919739700000000),
    (62, 153, 152.922104700000000),
    (62, 154, 153.922216900000000),
    (62, 155, 154.924647700000000),
    (62, 156, 155.925536000000000),
    (62, 157, 156.928418700000000),
    (62, 158, 157.929951000000000),
    (62, 159, 158.933217200000000),
    (62, 160, 159.935335300000000),
    (62, 161, 160.939160200000000),
    (62, 162, 161.941460000000000),
    (62, 163, 162.945550000000000),
    (62, 164, 163.948360000000000),
    (62, 165, 164.952970000000000),
    (63, 130, 129.963690000000000),
    (63, 131, 130.957840000000000),
    (63, 132, 131.954670000000000),
    (63, 133, 132.949290000000000),
    (63, 134, 133.946400000000000),
    (63, 135, 134.941870000000000),
    (63, 136, 135.939620000000000),
    (63, 137, 136.935460000000000),
    (63, 138, 137.933709000000000),
    (63, 139, 138.929792000000000),
    (63, 140, 139.928088000000000),
    (63, 141, 140.924932000000000),
    (63, 142, 141.923442000000000),
    (63, 143, 142.920299000000000),
    (63, 144, 143.918820000000000),
    (63, 145, 144.916272600000000),
    (63, 146, 145.917211000000000),
    (63, 147, 146.916752700000000),
    (63, 148, 147.918089000000000),
    (63, 149, 148.917937800000000),
    (63, 150, 149.919707700000000),
    (63, 151, 150.919857800000000),
    (63, 153, 152.921238000000000),
    (63, 154, 153.922987000000000),
    (63, 155, 154.922901100000000),
    (63, 156, 155.924760500000000),
    (63, 157, 156.925433400000000),
    (63, 158, 157.927799000000000),
    (63, 159, 158.929100100000000),
    (63, 160, 159.931851000000000),
    (63, 161, 160.933664000000000),
    (63, 162, 161.936989000000000),
    (63, 163, 162.939196000000000),
    (63, 164, 163.942740000000000),
    (63, 165, 164.945590000000000),
    (63, 166, 165.949620000000000),
    (63, 167, 166.952890000000000),
    (64, 133, 132.961330000000000),
    (64, 134, 133.955660000000000),
    (64, 135, 134.952450000000000),
    (64, 136, 135.947300000000000),
    (64, 137, 136.945020000000000),
    (64, 138, 137.940250000000000),
    (64, 139, 138.938130000000000),
    (64, 140, 139.933674000000000),
    (64, 141, 140.932126000000000),
    (64, 142, 141.928116000000000),
    (64, 143, 142.926750000000000),
    (64, 144, 143.922963000000000),
    (64, 145, 144.921713000000000),
    (64, 146, 145.918318800000000),
    (64, 147, 146.919101400000000),
    (64, 148, 147.918121500000000),
    (64, 149, 148.919348100000000),
    (64, 150, 149.918664400000000),
    (64, 151, 150.920356000000000),
    (64, 152, 151.919799500000000),
    (64, 153, 152.921758000000000),
    (64, 154, 153.920874100000000),
    (64, 155, 154.922630500000000),
    (64, 156, 155.922131200000000),
    (64, 158, 157.924112300000000),
    (64, 159, 158.926397000000000),
    (64, 160, 159.927062400000000),
    (64, 161, 160.929677500000000),
    (64, 162, 161.930993000000000),
    (64, 163, 162.934176900000000),
    (64, 164, 163.935830000000000),
    (64, 165, 164.939360000000000),
    (64, 166, 165.941460000000000),
    (64, 167, 166.945450000000000),
    (64, 168, 167.948080000000000),
    (64, 169, 168.952600000000000),
    (65, 135, 134.964760000000000),
    (65, 136, 135.961290000000000),
    (65, 137, 136.956020000000000),
    (65, 138, 137.953120000000000),
    (65, 139, 138.948330000000000),
    (65, 140, 139.945810000000000),
    (65, 141, 140.941450000000000),
    (65, 142, 141.939280000000000),
    (65, 143, 142.935137000000000),
    (65, 144, 143.933045000000000),
    (65, 145, 144.928820000000000),
    (65, 146, 145.927253000000000),
    (65, 147, 146.924054800000000),
    (65, 148, 147.924282000000000),
    (65, 149, 148.923253500000000),
    (65, 150, 149.923664900000000),
    (65, 151, 150.923109600000000),
    (65, 152, 151.924083000000000),
    (65, 153, 152.923442400000000),
    (65, 154, 153.924685000000000),
    (65, 155, 154.923511000000000),
    (65, 156, 155.924755200000000),
    (65, 157, 156.924033000000000),
    (65, 158, 157.925420900000000),
    (65, 160, 159.927175600000000),
    (65, 161, 160.927577800000000),
    (65, 162, 161.929495000000000),
    (65, 163, 162.930654700000000),
    (65, 164, 163.933360000000000),
    (65, 165, 164.934980000000000),
    (65, 166, 165.937860000000000),
    (65, 167, 166.939960000000000),
    (65, 168, 167.943400000000000),
    (65, 169, 168.945970000000000),
    (65, 170, 169.949840000000000),
    (65, 171, 170.952730000000000),
    (66, 138, 137.962500000000000),
    (66, 139, 138.959590000000000),
    (66, 140, 139.954020000000000),
    (66, 141, 140.951280000000000),
    (66, 142, 141.946190000000000),
    (66, 143, 142.943994000000000),
    (66, 144, 143.939269500000000),
    (66, 145, 144.937474000000000),
    (66, 146, 145.932844500000000),
    (66, 147, 146.931082700000000),
    (66, 148, 147.927157000000000),
    (66, 149, 148.927322000000000),
    (66, 150, 149.925593300000000),
    (66, 151, 150.926191600000000),
    (66, 152, 151.924725300000000),
    (66, 153, 152.925772400000000),
    (66, 154, 153.924429300000000),
    (66, 155, 154.925759000000000),
    (66, 156, 155.924284700000000),
    (66, 157, 156.925470700000000),
    (66, 158, 157.924415900000000),
    (66, 159, 158.925747000000000),
    (66, 160, 159.925204600000000),
    (66, 161, 160.926940500000000),
    (66, 162, 161.926805600000000),
    (66, 164, 163.929181900000000),
    (66, 165, 164.931710500000000),
    (66, 166, 165.932813900000000),
    (66, 167, 166.935661000000000),
    (66, 168, 167.937130000000000),
    (66, 169, 168.940310000000000),
    (66, 170, 169.942390000000000),
    (66, 171, 170.946120000000000),
    (66, 172, 171.948460000000000),
    (66, 173, 172.952830000000000),
    (67, 140, 139.968590000000000),
    (67, 141, 140.963110000000000),
    (67, 142, 141.960010000000000),
    (67, 143, 142.954860000000000),
    (67, 144, 143.952109700000000),
    (67, 145, 144.947267400000000),
    (67, 146, 145.944993500000000),
    (67, 147, 146.940142300000000),
    (67, 148, 147.937744000000000),
    (67, 149, 148.933803000000000),
    (67, 150, 149.933498000000000),
    (67, 151, 150.931698300000000),
    (67, 152, 151.931724000000000),
    (67, 153, 152.930206400000000),
    (67, 154, 153.930606800000000),
    (67, 155, 154.929104000000000),
    (67, 156, 155.929706000000000),
    (67, 157, 156.928254000000000),
    (67, 158, 157.928946000000000),
    (67, 159, 158.927719700000000),
    (67, 160, 159.928737000000000),
    (67, 161, 160.927861500000000),
    (67, 162, 161.929102300000000),
    (67, 163, 162.928741000000000),
    (67, 164, 163.930240300000000),
    (67, 166, 165.932290900000000),
    (67, 167, 166.933138500000000),
    (67, 168, 167.935522000000000),
    (67, 169, 168.936878000000000),
    (67, 170, 169.939625000000000),
    (67, 171, 170.941470000000000),
    (67, 172, 171.944730000000000),
    (67, 173, 172.947020000000000),
    (67, 174, 173.950950000000000),
    (67, 175, 174.953620000000000),
    (68, 142, 141.970100000000000),
    (68, 143, 142.966620000000000),
    (68, 144, 143.960700000000000),
    (68, 145, 144.958050000000000),
    (68, 146, 145.952418400000000),
    (68, 147, 146.949964000000000),
    (68, 148, 147.944735000000000),
    (68, 149, 148.942306000000000),
    (68, 150, 149.937916000000000),
    (68, 151, 150.937449000000000),
    (68, 152, 151.935057000000000),
    (68, 153, 152.935080000000000),
    (68, 154, 153.932790800000000),
    (68, 155, 154.933215900000000),
    (68, 156, 155.931067000000000),
    (68, 157, 156.931949000000000),
    (68, 158, 157.929893000000000),
    (68, 159, 158.930691800000000),
    (68, 160, 159.929077000000000),
    (68, 161, 160.930004600000000),
    (68, 162, 161.928788400000000),
    (68, 163, 162.930040800000000),
    (68, 164, 163.929208800000000),
    (68, 165, 164.930734500000000),
    (68, 166, 165.930299500000000),
    (68, 168, 167.932376700000000),
    (68, 169, 168.934596800000000),
    (68, 170, 169.935470200000000),
    (68, 171, 170.938035700000000),
    (68, 172, 171.939361900000000),
    (68, 173, 172.942400000000000),
    (68, 174, 173.944230000000000),
    (68, 175, 174.947770000000000),
    (68, 176, 175.949940000000000),
    (68, 177, 176.953990000000000),
    (69, 144, 143.976280000000000),
    (69, 145, 144.970390000000000),
    (69, 146, 145.966840000000000),
    (69, 147, 146.961379900000000),
    (69, 148, 147.958384000000000),
    (69, 149, 148.952890000000000),
    (69, 150, 149.950090000000000),
    (69, 151, 150.945488000000000),
    (69, 152, 151.944422000000000),
    (69, 153, 152.942040000000000),
    (69, 154, 153.941570000000000),
    (69, 155, 154.939210000000000),
    (69, 156, 155.938992000000000),
    (69, 157, 156.936944000000000),
    (69, 158, 157.936980000000000),
    (69, 159, 158.934975000000000),
    (69, 160, 159.935263000000000),
    (69, 161, 160.933549000000000),
    (69, 162, 161.934002000000000),
    (69, 163, 162.932659200000000),
    (69, 164, 163.933544000000000),
    (69, 165, 164.932443100000000),
    (69, 166, 165.933561000000000),
    (69, 167, 166.932856200000000),
    (69, 168, 167.934177400000000),
    (69, 170, 169.935806000000000),
    (69, 171, 170.936433900000000),
    (69, 172, 171.938405500000000),
    (69, 173, 172.939608400000000),
    (69, 174, 173.942173000000000),
    (69, 175, 174.943841000000000),
    (69, 176, 175.947000000000000),
    (69, 177, 176.949040000000000),
    (69, 178, 177.952640000000000),
    (69, 179, 178.955340000000000),
    (70, 148, 147.967580000000000),
    (70, 149, 148.964360000000000),
    (70, 150, 149.958520000000000),
    (70, 151, 150.955400000000000),
    (70, 152, 151.950270000000000),
    (70, 153, 152.949320000000000),
    (70, 154, 153.946396000000000),
    (70, 155, 154.945783000000000),
    (70, 156, 155.942825000000000),
    (70, 157, 156.942645000000000),
    (70, 158, 157.939870500000000),
    (70, 159, 158.940055000000000),
    (70, 160, 159.937557000000000),
    (70, 161, 160.937907000000000),
    (70, 162, 161.935774000000000),
    (70, 163, 162.936340000000000),
    (70, 164, 163.934495000000000),
    (70, 165, 164.935270000000000),
    (70, 166, 165.933874700000000),
    (70, 167, 166.934953000000000),
    (70, 168, 167.933889600000000),
    (70, 169, 168.935182500000000),
    (70, 170, 169.934766400000000),
    (70, 171, 170.936330200000000),
    (70, 172, 171.936385900000000),
    (70, 174, 173.938866400000000),
    (70, 175, 174.941280800000000),
    (70, 176, 175.942576400000000),
    (70, 177, 176.945265600000000),
    (70, 178, 177.946651000000000),
    (70, 179, 178.950040000000000),
    (70, 180, 179.952120000000000),
    (70, 181, 180.955890000000000),
    (71, 150, 149.973550000000000),
    (71, 151, 150.967680000000000),
    (71, 152, 151.964120000000000),
    (71, 153, 152.958750000000000),
    (71, 154, 153.957360000000000),
    (71, 155, 154.954321000000000),
    (71, 156, 155.953033000000000),
    (71, 157, 156.950127000000000),
    (71, 158, 157.949316000000000),
    (71, 159, 158.946636000000000),
    (71, 160, 159.946033000000000),
    (71, 161, 160.943572000000000),
    (71, 162, 161.943283000000000),
    (71, 163, 162.941179000000000),
    (71, 164, 163.941339000000000),
    (71, 165, 164.939407000000000),
    (71, 166, 165.939859000000000),
    (71, 167, 166.938270000000000),
    (71, 168, 167.938736000000000),
    (71, 169, 168.937644100000000),
    (71, 170, 169.938478000000000),
    (71, 171, 170.937917000000000),
    (71, 172, 171.939089100000000),
    (71, 173, 172.938934000000000),
    (71, 174, 173.940340900000000),
    (71, 176, 175.942689700000000),
    (71, 177, 176.943761500000000),
    (71, 178, 177.945958000000000),
    (71, 179, 178.947330900000000),
    (71, 180, 179.949888000000000),
    (71, 181, 180.951910000000000),
    (71, 182, 181.955040000000000),
    (71, 183, 182.957363000000000),
    (71, 184, 183.960910000000000),
    (71, 185, 184.963620000000000),
    (72, 153, 152.970690000000000),
    (72, 154, 153.964860000000000),
    (72, 155, 154.963110000000000),
    (72, 156, 155.959350000000000),
    (72, 157, 156.958240000000000),
    (72, 158, 157.954801000000000),
    (72, 159, 158.953996000000000),
    (72, 160, 159.950691000000000),
    (72, 161, 160.950278000000000),
    (72, 162, 161.947214800000000),
    (72, 163, 162.947113000000000),
    (72, 164, 163.944371000000000),
    (72, 165, 164.944567000000000),
    (72, 166, 165.942180000000000),
    (72, 167, 166.942600000000000),
    (72, 168, 167.940568000000000),
    (72, 169, 168.941259000000000),
    (72, 170, 169.939609000000000),
    (72, 171, 170.940492000000000),
    (72, 172, 171.939450000000000),
    (72, 173, 172.940513000000000),
    (72, 174, 173.940046100000000),
    (72, 175, 174.941509200000000),
    (72, 176, 175.941407600000000),
    (72, 177, 176.943227700000000),
    (72, 178, 177.943705800000000),
    (72, 180, 179.946557000000000),
    (72, 181, 180.949108300000000),
    (72, 182, 181.950561200000000),
    (72, 183, 182.953530000000000),
    (72, 184, 183.955446000000000),
    (72, 185, 184.958862000000000),
    (72, 186, 185.960897000000000),
    (72, 187, 186.964770000000000),
    (72, 188, 187.966850000000000),
    (72, 189, 188.970840000000000),
    (73, 155, 154.974240000000000),
    (73, 156, 155.972030000000000),
    (73, 157, 156.968180000000000),
    (73, 158, 157.966540000000000),
    (73, 159, 158.963023000000000),
    (73, 160, 159.961488000000000),
    (73, 161, 160.958452000000000),
    (73, 162, 161.957294000000000),
    (73, 163, 162.954337000000000),
    (73, 164, 163.953534000000000),
    (73, 165, 164.950781000000000),
    (73, 166, 165.950512000000000),
    (73, 167, 166.948093000000000),
    (73, 168, 167.948047000000000),
    (73, 169, 168.946011000000000),
    (73, 170, 169.946175000000000),
    (73, 171, 170.944476000000000),
    (73, 172, 171.944895000000000),
    (73, 173, 172.943750000000000),
    (73, 174, 173.944454000000000),
    (73, 175, 174.943737000000000),
    (73, 176, 175.944857000000000),
    (73, 177, 176.944479500000000),
    (73, 178, 177.945678000000000),
    (73, 179, 178.945936600000000),
    (73, 180, 179.947464800000000),
    (73, 182, 181.950151900000000),
    (73, 183, 182.951372600000000),
    (73, 184, 183.954008000000000),
    (73, 185, 184.955559000000000),
    (73, 186, 185.958551000000000),
    (73, 187, 186.960386000000000),
    (73, 188, 187.963916000000000),
    (73, 189, 188.965830000000000),
    (73, 190, 189.969390000000000),
    (73, 191, 190.971560000000000),
    (73, 192, 191.975140000000000),
    (74, 157, 156.978840000000000),
    (74, 158, 157.974560000000000),
    (74, 159, 158.972640000000000),
    (74, 160, 159.968460000000000),
    (74, 161, 160.967200000000000),
    (74, 162, 161.963499000000000),
    (74, 163, 162.962524000000000),
    (74, 164, 163.958961000000000),
    (74, 165, 164.958281000000000),
    (74, 166, 165.955031000000000),
    (74, 167, 166.954805000000000),
    (74, 168, 167.951806000000000),
    (74, 169, 168.951779000000000),
    (74, 170, 169.949232000000000),
    (74, 171, 170.949451000000000),
    (74, 172, 171.947292000000000),
    (74, 173, 172.947689000000000),
    (74, 174, 173.946079000000000),
    (74, 175, 174.946717000000000),
    (74, 176, 175.945634000000000),
    (74, 177, 176.946643000000000),
    (74, 178, 177.945883000000000),
    (74, 179, 178.947077000000000),
    (74, 180, 179.946710800000000),
    (74, 181, 180.948197800000000),
    (74, 182, 181.948203940000000),
    (74, 183, 182.950222750000000),
    (74, 185, 184.953418970000000),
    (74, 186, 185.954362800000000),
    (74, 187, 186.957158800000000),
    (74, 188, 187.958486200000000),
    (74, 189, 188.961763000000000),
    (74, 190, 189.963091000000000),
    (74, 191, 190.966531000000000),
    (74, 192, 191.968170000000000),
    (74, 193, 192.971780000000000),
    (74, 194, 193.973670000000000),
    (75, 159, 158.984180000000000),
    (75, 160, 159.981820000000000),
    (75, 161, 160.977570000000000),
    (75, 162, 161.975840000000000),
    (75, 163, 162.972080000000000),
    (75, 164, 163.970453000000000),
    (75, 165, 164.967103000000000),
    (75, 166, 165.965761000000000),
    (75, 167, 166.962595000000000),
    (75, 168, 167.961573000000000),
    (75, 169, 168.958766000000000),
    (75, 170, 169.958220000000000),
    (75, 171, 170.955716000000000),
    (75, 172, 171.955420000000000),
    (75, 173, 172.953243000000000),
    (75, 174, 173.953115000000000),
    (75, 175, 174.951381000000000),
    (75, 176, 175.951623000000000),
    (75, 177, 176.950328000000000),
    (75, 178, 177.950989000000000),
    (75, 179, 178.949989000000000),
    (75, 180, 179.950792000000000),
    (75, 181, 180.950058000000000),
    (75, 182, 181.951210000000000),
    (75, 183, 182.950819600000000),
    (75, 184, 183.952522800000000),
    (75, 185, 184.952954500000000),
    (75, 187, 186.955750100000000),
    (75, 188, 187.958111500000000),
    (75, 189, 188.959226000000000),
    (75, 190, 189.961744000000000),
    (75, 191, 190.963122000000000),
    (75, 192, 191.966088000000000),
    (75, 193, 192.967541000000000),
    (75, 194, 193.970760000000000),
    (75, 195, 194.972540000000000),
    (75, 196, 195.975800000000000),
    (75, 197, 196.977990000000000),
    (75, 198, 197.981600000000000),
    (76, 161, 160.989030000000000),
    (76, 162, 161.984430000000000),
    (76, 163, 162.982410000000000),
    (76, 164, 163.978020000000000),
    (76, 165, 164.976600000000000),
    (76, 166, 165.972692000000000),
    (76, 167, 166.971549000000000),
    (76, 168, 167.967808000000000),
    (76, 169, 168.967018000000000),
    (76, 170, 169.963578000000000),
    (76, 171, 170.963174000000000),
    (76, 172, 171.960017000000000),
    (76, 173, 172.959808000000000),
    (76, 174, 173.957064000000000),
    (76, 175, 174.956945000000000),
    (76, 176, 175.954806000000000),
    (76, 177, 176.954966000000000),
    (76, 178, 177.953254000000000),
    (76, 179, 178.953817000000000),
    (76, 180, 179.952375000000000),
    (76, 181, 180.953247000000000),
    (76, 182, 181.952110000000000),
    (76, 183, 182.953125000000000),
    (76, 184, 183.952488500000000),
    (76, 185, 184.954041700000000),
    (76, 186, 185.953835000000000),
    (76, 187, 186.955747400000000),
    (76, 188, 187.955835200000000),
    (76, 189, 188.958144200000000),
    (76, 191, 190.960926400000000),
    (76, 192, 191.961477000000000),
    (76, 193, 192.964147900000000),
    (76, 194, 193.965177200000000),
    (76, 195, 194.968318000000000),
    (76, 196, 195.969641000000000),
    (76, 197, 196.972830000000000),
    (76, 198, 197.974410000000000),
    (76, 199, 198.978010000000000),
    (76, 200, 199.979840000000000),
    (76, 201, 200.983640000000000),
    (76, 202, 201.985950000000000),
    (77, 164, 163.991910000000000),
    (77, 165, 164.987500000000000),
    (77, 166, 165.985660000000000),
    (77, 167, 166.981666000000000),
    (77, 168, 167.979907000000000),
    (77, 169, 168.976298000000000),
    (77, 170, 169.974922000000000),
    (77, 171, 170.971640000000000),
    (77, 172, 171.970607000000000),
    (77, 173, 172.967506000000000),
    (77, 174, 173.966861000000000),
    (77, 175, 174.964150000000000),
    (77, 176, 175.963650000000000),
    (77, 177, 176.961301000000000),
    (77, 178, 177.961082000000000),
    (77, 179, 178.959120000000000),
    (77, 180, 179.959229000000000),
    (77, 181, 180.957625000000000),
    (77, 182, 181.958076000000000),
    (77, 183, 182.956840000000000),
    (77, 184, 183.957476000000000),
    (77, 185, 184.956698000000000),
    (77, 186, 185.957944000000000),
    (77, 187, 186.957542000000000),
    (77, 188, 187.958828000000000),
    (77, 189, 188.958715000000000),
    (77, 190, 189.960541200000000),
    (77, 191, 190.960589300000000),
    (77, 193, 192.962921600000000),
    (77, 194, 193.965073500000000),
    (77, 195, 194.965974700000000),
    (77, 196, 195.968397000000000),
    (77, 197, 196.969655000000000),
    (77, 198, 197.972280000000000),
    (77, 199, 198.973805000000000),
    (77, 200, 199.976800000000000),
    (77, 201, 200.978640000000000),
    (77, 202, 201.981990000000000),
    (77, 203, 202.984230000000000),
    (77, 204, 203.989600000000000),
    (78, 166, 165.994860000000000),
    (78, 167, 166.992690000000000),
    (78, 168, 167.988130000000000),
    (78, 169, 168.986570000000000),
    (78, 170, 169.982496000000000),
    (78, 171, 170.981245000000000),
    (78, 172, 171.977351000000000),
    (78, 173, 172.976443000000000),
    (78, 174, 173.972820000000000),
    (78, 175, 174.972410000000000),
    (78, 176, 175.968938000000000),
    (78, 177, 176.968470000000000),
    (78, 178, 177.965650000000000),
    (78, 179, 178.965359000000000),
    (78, 180, 179.963032000000000),
    (78, 181, 180.963098000000000),
    (78, 182, 181.961172000000000),
    (78, 183, 182.961597000000000),
    (78, 184, 183.959915000000000),
    (78, 185, 184.960614000000000),
    (78, 186, 185.959351000000000),
    (78, 187, 186.960617000000000),
    (78, 188, 187.959388900000000),
    (78, 189, 188.960831000000000),
    (78, 190, 189.959929700000000),
    (78, 191, 190.961672900000000),
    (78, 192, 191.961038700000000),
    (78, 193, 192.962982400000000),
    (78, 194, 193.962680900000000),
    (78, 196, 195.964952090000000),
    (78, 197, 196.967340690000000),
    (78, 198, 197.967894900000000),
    (78, 199, 198.970595200000000),
    (78, 200, 199.971443000000000),
    (78, 201, 200.974513000000000),
    (78, 202, 201.975639000000000),
    (78, 203, 202.978930000000000),
    (78, 204, 203.980760000000000),
    (78, 205, 204.986080000000000),
    (78, 206, 205.989660000000000),
    (79, 169, 168.998080000000000),
    (79, 170, 169.995970000000000),
    (79, 171, 170.991876000000000),
    (79, 172, 171.989942000000000),
    (79, 173, 172.986241000000000),
    (79, 174, 173.984717000000000),
    (79, 175, 174.981304000000000),
    (79, 176, 175.980250000000000),
    (79, 177, 176.976870000000000),
    (79, 178, 177.976032000000000),
    (79, 179, 178.973174000000000),
    (79, 180, 179.972523000000000),
    (79, 181, 180.970079000000000),
    (79, 182, 181.969618000000000),
    (79, 183, 182.967591000000000),
    (79, 184, 183.967452000000000),
    (79, 185, 184.965790000000000),
    (79, 186, 185.965953000000000),
    (79, 187, 186.964543000000000),
    (79, 188, 187.965349000000000),
    (79, 189, 188.963948000000000),
    (79, 190, 189.964698000000000),
    (79, 191, 190.963702000000000),
    (79, 192, 191.964814000000000),
    (79, 193, 192.964137300000000),
    (79, 194, 193.965417800000000),
    (79, 195, 194.965035200000000),
    (79, 196, 195.966569900000000),
    (79, 198, 197.968242420000000),
    (79, 199, 198.968765280000000),
    (79, 200, 199.970756000000000),
    (79, 201, 200.971657500000000),
    (79, 202, 201.973856000000000),
    (79, 203, 202.975154400000000),
    (79, 204, 203.977830000000000),
    (79, 205, 204.979850000000000),
    (79, 206, 205.984740000000000),
    (79, 207, 206.988400000000000),
    (79, 208, 207.993450000000000),
    (79, 209, 208.997350000000000),
    (79, 210, 210.002500000000000),
    (80, 171, 171.003530000000000),
    (80, 172, 171.998810000000000),
    (80, 173, 172.997090000000000),
    (80, 174, 173.992865000000000),
    (80, 175, 174.991441000000000),
    (80, 176, 175.987361000000000),
    (80, 177, 176.986277000000000),
    (80, 178, 177.982484000000000),
    (80, 179, 178.981831000000000),
    (80, 180, 179.978260000000000),
    (80, 181, 180.977819000000000),
    (80, 182, 181.974689000000000),
    (80, 183, 182.974444800000000),
    (80, 184, 183.971714000000000),
    (80, 185, 184.971899000000000),
    (80, 186, 185.969362000000000),
    (80, 187, 186.969814000000000),
    (80, 188, 187.967567000000000),
    (80, 189, 188.968195000000000),
    (80, 190, 189.966323000000000),
    (80, 191, 190.967157000000000),
    (80, 192, 191.965635000000000),
    (80, 193, 192.966653000000000),
    (80, 194, 193.965449100000000),
    (80, 195, 194.966721000000000),
    (80, 196, 195.965832600000000),
    (80, 197, 196.967212800000000),
    (80, 198, 197.966768600000000),
    (80, 199, 198.968280640000000),
    (80, 200, 199.968326590000000),
    (80, 202, 201.970643400000000),
    (80, 203, 202.972872800000000),
    (80, 204, 203.973493980000000),
    (80, 205, 204.976073400000000),
    (80, 206, 205.977514000000000),
    (80, 207, 206.982300000000000),
    (80, 208, 207.985759000000000),
    (80, 209, 208.990720000000000),
    (80, 210, 209.994240000000000),
    (80, 211, 210.999330000000000),
    (80, 212, 212.002960000000000),
    (80, 213, 213.008230000000000),
    (80, 214, 214.012000000000000),
    (80, 215, 215.017400000000000),
    (80, 216, 216.021320000000000),
    (81, 176, 176.000624000000000),
    (81, 177, 176.996431000000000),
    (81, 178, 177.994850000000000),
    (81, 179, 178.991111000000000),
    (81, 180, 179.990057000000000),
    (81, 181, 180.986260000000000),
    (81, 182, 181.985713000000000),
    (81, 183, 182.982193000000000),
    (81, 184, 183.981886000000000),
    (81, 185, 184.978789000000000),
    (81, 186, 185.978651000000000),
    (81, 187, 186.975906300000000),
    (81, 188, 187.976021000000000),
    (81, 189, 188.973588000000000),
    (81, 190, 189.973828000000000),
    (81, 191, 190.971784200000000),
    (81, 192, 191.972225000000000),
    (81, 193, 192.970502000000000),
    (81, 194, 193.971081000000000),
    (81, 195, 194.969774000000000),
    (81, 196, 195.970481000000000),
    (81, 197, 196.969576000000000),
    (81, 198, 197.970483000000000),
    (81, 199, 198.969877000000000),
    (81, 200, 199.970963300000000),
    (81, 201, 200.970822000000000),
    (81, 202, 201.972102000000000),
    (81, 203, 202.972344600000000),
    (81, 205, 204.974427800000000),
    (81, 206, 205.976110600000000),
    (81, 207, 206.977419700000000),
    (81, 208, 207.982019000000000),
    (81, 209, 208.985359400000000),
    (81, 210, 209.990074000000000),
    (81, 211, 210.993475000000000),
    (81, 212, 211.998340000000000),
    (81, 213, 213.001915000000000),
    (81, 214, 214.006940000000000),
    (81, 215, 215.010640000000000),
    (81, 216, 216.015800000000000),
    (81, 217, 217.019660000000000),
    (81, 218, 218.024790000000000),
    (82, 178, 178.003831000000000),
    (82, 179, 179.002201000000000),
    (82, 180, 179.997928000000000),
    (82, 181, 180.996653000000000),
    (82, 182, 181.992672000000000),
    (82, 183, 182.991872000000000),
    (82, 184, 183.988136000000000),
    (82, 185, 184.987610000000000),
    (82, 186, 185.984238000000000),
    (82, 187, 186.983910900000000),
    (82, 188, 187.980875000000000),
    (82, 189, 188.980807000000000),
    (82, 190, 189.978082000000000),
    (82, 191, 190.978276000000000),
    (82, 192, 191.975775000000000),
    (82, 193, 192.976173000000000),
    (82, 194, 193.974012000000000),
    (82, 195, 194.974543000000000),
    (82, 196, 195.972774000000000),
    (82, 197, 196.973431200000000),
    (82, 198, 197.972034000000000),
    (82, 199, 198.972913000000000),
    (82, 200, 199.971819000000000),
    (82, 201, 200.972883000000000),
    (82, 202, 201.972152000000000),
    (82, 203, 202.973391100000000),
    (82, 204, 203.973044000000000),
    (82, 205, 204.974482200000000),
    (82, 206, 205.974465700000000),
    (82, 208, 207.976652500000000),
    (82, 209, 208.981090500000000),
    (82, 210, 209.984188900000000),
    (82, 211, 210.988737100000000),
    (82, 212, 211.991897700000000),
    (82, 213, 212.996562900000000),
    (82, 214, 213.999805900000000),
    (82, 215, 215.004740000000000),
    (82, 216, 216.008030000000000),
    (82, 217, 217.013140000000000),
    (82, 218, 218.016590000000000),
    (82, 219, 219.021770000000000),
    (82, 220, 220.025410000000000),
    (83, 184, 184.001275000000000),
    (83, 185, 184.997600000000000),
    (83, 186, 185.996644000000000),
    (83, 187, 186.993147000000000),
    (83, 188, 187.992287000000000),
    (83, 189, 188.989195000000000),
    (83, 190, 189.988622000000000),
    (83, 191, 190.985786600000000),
    (83, 192, 191.985469000000000),
    (83, 193, 192.982960000000000),
    (83, 194, 193.982785000000000),
    (83, 195, 194.980648800000000),
    (83, 196, 195.980667000000000),
    (83, 197, 196.978865100000000),
    (83, 198, 197.979206000000000),
    (83, 199, 198.977673000000000),
    (83, 200, 199.978131000000000),
    (83, 201, 200.977010000000000),
    (83, 202, 201.977734000000000),
    (83, 203, 202.976893000000000),
    (83, 204, 203.977836100000000),
    (83, 205, 204.977386700000000),
    (83, 206, 205.978499300000000),
    (83, 207, 206.978471000000000),
    (83, 208, 207.979742500000000),
    (83, 210, 209.984120700000000),
    (83, 211, 210.987269700000000),
    (83, 212, 211.991286000000000),
    (83, 213, 212.994385100000000),
    (83, 214, 213.998712000000000),
    (83, 215, 215.001770000000000),
    (83, 216, 216.006306000000000),
    (83, 217, 217.009372000000000),
    (83, 218, 218.014188000000000),
    (83, 219, 219.017480000000000),
    (83, 220, 220.022350000000000),
    (83, 221, 221.025870000000000),
    (83, 222, 222.030780000000000),
    (83, 223, 223.034500000000000),
    (83, 224, 224.039470000000000),
    (84, 186, 186.004393000000000),
    (84, 187, 187.003041000000000),
    (84, 188, 187.999416000000000),
    (84, 189, 188.998473000000000),
    (84, 190, 189.995101000000000),
    (84, 191, 190.994558500000000),
    (84, 192, 191.991336000000000),
    (84, 193, 192.991026000000000),
    (84, 194, 193.988186000000000),
    (84, 195, 194.988126000000000),
    (84, 196, 195.985526000000000),
    (84, 197, 196.985660000000000),
    (84, 198, 197.983389000000000),
    (84, 199, 198.983667000000000),
    (84, 200, 199.981799000000000),
    (84, 201, 200.982259800000000),
    (84, 202, 201.980758000000000),
    (84, 203, 202.981416100000000),
    (84, 204, 203.980310000000000),
    (84, 205, 204.981203000000000),
    (84, 206, 205.980474000000000),
    (84, 207, 206.981593800000000),
    (84, 208, 207.981246100000000),
    (84, 210, 209.982874100000000),
    (84, 211, 210.986653600000000),
    (84, 212, 211.988868400000000),
    (84, 213, 212.992857600000000),
    (84, 214, 213.995201700000000),
    (84, 215, 214.999420100000000),
    (84, 216, 216.001915200000000),
    (84, 217, 217.006318200000000),
    (84, 218, 218.008973500000000),
    (84, 219, 219.013614000000000),
    (84, 220, 220.016386000000000),
    (84, 221, 221.021228000000000),
    (84, 222, 222.024140000000000),
    (84, 223, 223.029070000000000),
    (84, 224, 224.032110000000000),
    (84, 225, 225.037070000000000),
    (84, 226, 226.040310000000000),
    (84, 227, 227.045390000000000),
    (85, 191, 191.004148000000000),
    (85, 192, 192.003152000000000),
    (85, 193, 192.999927000000000),
    (85, 194, 193.999236000000000),
    (85, 195, 194.996268500000000),
    (85, 196, 195.995800000000000),
    (85, 197, 196.993189000000000),
    (85, 198, 197.992784000000000),
    (85, 199, 198.990527700000000),
    (85, 200, 199.990351000000000),
    (85, 201, 200.988417100000000),
    (85, 202, 201.988630000000000),
    (85, 203, 202.986943000000000),
    (85, 204, 203.987251000000000),
    (85, 205, 204.986076000000000),
    (85, 206, 205.986657000000000),
    (85, 207, 206.985800000000000),
    (85, 208, 207.986613300000000),
    (85, 209, 208.986170200000000),
    (85, 211, 210.987496600000000),
    (85, 212, 211.990737700000000),
    (85, 213, 212.992937000000000),
    (85, 214, 213.996372100000000),
    (85, 215, 214.998652800000000),
    (85, 216, 216.002423600000000),
    (85, 217, 217.004719200000000),
    (85, 218, 218.008695000000000),
    (85, 219, 219.011161800000000),
    (85, 220, 220.015433000000000),
    (85, 221, 221.018017000000000),
    (85, 222, 222.022494000000000),
    (85, 223, 223.025151000000000),
    (85, 224, 224.029749000000000),
    (85, 225, 225.032630000000000),
    (85, 226, 226.037160000000000),
    (85, 227, 227.040240000000000),
    (85, 228, 228.044750000000000),
    (85, 229, 229.048120000000000),
    (86, 193, 193.009708000000000),
    (86, 194, 194.006144000000000),
    (86, 195, 195.005422000000000),
    (86, 196, 196.002116000000000),
    (86, 197, 197.001585000000000),
    (86, 198, 197.998679000000000),
    (86, 199, 198.998390000000000),
    (86, 200, 199.995690000000000),
    (86, 201, 200.995628000000000),
    (86, 202, 201.993264000000000),
    (86, 203, 202.993388000000000),
    (86, 204, 203.991430000000000),
    (86, 205, 204.991719000000000),
    (86, 206, 205.990214000000000),
    (86, 207, 206.990730300000000),
    (86, 208, 207.989635000000000),
    (86, 209, 208.990415000000000),
    (86, 210, 209.989689100000000),
    (86, 211, 210.990601100000000),
    (86, 212, 211.990703900000000),
    (86, 213, 212.993883100000000),
    (86, 214, 213.995363000000000),
    (86, 215, 214.998745900000000),
    (86, 216, 216.000271900000000),
    (86, 217, 217.003928000000000),
    (86, 218, 218.005601600000000),
    (86, 219, 219.009480400000000),
    (86, 220, 220.011394100000000),
    (86, 221, 221.015537100000000),
    (86, 223, 223.021889300000000),
    (86, 224, 224.024096000000000),
    (86, 225, 225.028486000000000),
    (86, 226, 226.030861000000000),
    (86, 227, 227.035304000000000),
    (86, 228, 228.037835000000000),
    (86, 229, 229.042257000000000),
    (86, 230, 230.045140000000000),
    (86, 231, 231.049870000000000),
    (87, 199, 199.007259000000000),
    (87, 200, 200.006586000000000),
    (87, 201, 201.003867000000000),
    (87, 202, 202.003320000000000),
    (87, 203, 203.000940700000000),
    (87, 204, 204.000652000000000),
    (87, 205, 204.998593900000000),
    (87, 206, 205.998666000000000),
    (87, 207, 206.996946000000000),
    (87, 208, 207.997138000000000),
    (87, 209, 208.995955000000000),
    (87, 210, 209.996422000000000),
    (87, 211, 210.995556000000000),
    (87, 212, 211.996225700000000),
    (87, 213, 212.996186000000000),
    (87, 214, 213.998971300000000),
    (87, 215, 215.000341800000000),
    (87, 216, 216.003189900000000),
    (87, 217, 217.004632300000000),
    (87, 218, 218.007578700000000),
    (87, 219, 219.009252400000000),
    (87, 220, 220.012327700000000),
    (87, 221, 221.014255200000000),
    (87, 222, 222.017552000000000),
    (87, 224, 224.023398000000000),
    (87, 225, 225.025573000000000),
    (87, 226, 226.029566000000000),
    (87, 227, 227.031869000000000),
    (87, 228, 228.035823000000000),
    (87, 229, 229.038298000000000),
    (87, 230, 230.042416000000000),
    (87, 231, 231.045158000000000),
    (87, 232, 232.049370000000000),
    (87, 233, 233.052640000000000),
    (88, 201, 201.012710000000000),
    (88, 202, 202.009760000000000),
    (88, 203, 203.009304000000000),
    (88, 204, 204.006492000000000),
    (88, 205, 205.006268000000000),
    (88, 206, 206.003828000000000),
    (88, 207, 207.003799000000000),
    (88, 208, 208.001841000000000),
    (88, 209, 209.001990000000000),
    (88, 210, 210.000494000000000),
    (88, 211, 211.000893200000000),
    (88, 212, 211.999787000000000),
    (88, 213, 213.000384000000000),
    (88, 214, 214.000099700000000),
    (88, 215, 215.002720400000000),
    (88, 216, 216.003533400000000),
    (88, 217, 217.006320700000000),
    (88, 218, 218.007141000000000),
    (88, 219, 219.010085500000000),
    (88, 220, 220.011025900000000),
    (88, 221, 221.013917700000000),
    (88, 222, 222.015374800000000),
    (88, 223, 223.018502300000000),
    (88, 224, 224.020212000000000),
    (88, 225, 225.023611900000000),
    (88, 227, 227.029178300000000),
    (88, 228, 228.031070700000000),
    (88, 229, 229.034942000000000),
    (88, 230, 230.037055000000000),
    (88, 231, 231.041027000000000),
    (88, 232, 232.043475300000000),
    (88, 233, 233.047582000000000),
    (88, 234, 234.050342000000000),
    (88, 235, 235.054970000000000),
    (89, 206, 206.014452000000000),
    (89, 207, 207.011966000000000),
    (89, 208, 208.011550000000000),
    (89, 209, 209.009495000000000),
    (89, 210, 210.009436000000000),
    (89, 211, 211.007732000000000),
    (89, 212, 212.007813000000000),
    (89, 213, 213.006609000000000),
    (89, 214, 214.006918000000000),
    (89, 215, 215.006475000000000),
    (89, 216, 216.008743000000000),
    (89, 217, 217.009344000000000),
    (89, 218, 218.011642000000000),
    (89, 219, 219.012421000000000),
    (89, 220, 220.014754900000000),
    (89, 221, 221.015592000000000),
    (89, 222, 222.017844200000000),
    (89, 223, 223.019137700000000),
    (89, 224, 224.021723200000000),
    (89, 225, 225.023230000000000),
    (89, 226, 226.026098400000000),
    (89, 228, 228.031021500000000),
    (89, 229, 229.032956000000000),
    (89, 230, 230.036327000000000),
    (89, 231, 231.038393000000000),
    (89, 232, 232.042034000000000),
    (89, 233, 233.044346000000000),
    (89, 234, 234.048139000000000),
    (89, 235, 235.050840000000000),
    (89, 236, 236.054988000000000),
    (89, 237, 237.058270000000000),
    (90, 208, 208.017900000000000),
    (90, 209, 209.017753000000000),
    (90, 210, 210.015094000000000),
    (90, 211, 211.014929000000000),
    (90, 212, 212.012988000000000),
    (90, 213, 213.013009000000000),
    (90, 214, 214.011500000000000),
    (90, 215, 215.011724800000000),
    (90, 216, 216.011056000000000),
    (90, 217, 217.013117000000000),
    (90, 218, 218.013276000000000),
    (90, 219, 219.015537000000000),
    (90, 220, 220.015748000000000),
    (90, 221, 221.018184000000000),
    (90, 222, 222.018469000000000),
    (90, 223, 223.020811900000000),
    (90, 224, 224.021464000000000),
    (90, 225, 225.023951400000000),
    (90, 226, 226.024903400000000),
    (90, 227, 227.027704200000000),
    (90, 228, 228.028741300000000),
    (90, 229, 229.031762700000000),
    (90, 230, 230.033134100000000),
    (90, 231, 231.036304600000000),
    (90, 233, 233.041582300000000),
    (90, 234, 234.043601400000000),
    (90, 235, 235.047255000000000),
    (90, 236, 236.049657000000000),
    (90, 237, 237.053629000000000),
    (90, 238, 238.056500000000000),
    (90, 239, 239.060770000000000),
    (91, 212, 212.023203000000000),
    (91, 213, 213.021109000000000),
    (91, 214, 214.020918000000000),
    (91, 215, 215.019183000000000),
    (91, 216, 216.019109000000000),
    (91, 217, 217.018325000000000),
    (91, 218, 218.020059000000000),
    (91, 219, 219.019904000000000),
    (91, 220, 220.021705000000000),
    (91, 221, 221.021875000000000),
    (91, 222, 222.023784000000000),
    (91, 223, 223.023963000000000),
    (91, 224, 224.025617600000000),
    (91, 225, 225.026131000000000),
    (91, 226, 226.027948000000000),
    (91, 227, 227.028805400000000),
    (91, 228, 228.031051700000000),
    (91, 229, 229.032097200000000),
    (91, 230, 230.034541000000000),
    (91, 232, 232.038591700000000),
    (91, 233, 233.040247200000000),
    (91, 234, 234.043307200000000),
    (91, 235, 235.045399000000000),
    (91, 236, 236.048668000000000),
    (91, 237, 237.051023000000000),
    (91, 238, 238.054637000000000),
    (91, 239, 239.057260000000000),
    (91, 240, 240.060980000000000),
    (91, 241, 241.064080000000000),
    (92, 217, 217.024660000000000),
    (92, 218, 218.023523000000000),
    (92, 219, 219.024999000000000),
    (92, 220, 220.024620000000000),
    (92, 221, 221.026280000000000),
    (92, 222, 222.026000000000000),
    (92, 223, 223.027739000000000),
    (92, 224, 224.027605000000000),
    (92, 225, 225.029391000000000),
    (92, 226, 226.029339000000000),
    (92, 227, 227.031157000000000),
    (92, 228, 228.031371000000000),
    (92, 229, 229.033506300000000),
    (92, 230, 230.033940100000000),
    (92, 231, 231.036293900000000),
    (92, 232, 232.037156300000000),
    (92, 233, 233.039635500000000),
    (92, 234, 234.040952300000000),
    (92, 235, 235.043930100000000),
    (92, 236, 236.045568200000000),
    (92, 237, 237.048730400000000),
    (92, 239, 239.054293500000000),
    (92, 240, 240.056593400000000),
    (92, 241, 241.060330000000000),
    (92, 242, 242.062930000000000),
    (92, 243, 243.066990000000000),
    (93, 219, 219.031430000000000),
    (93, 220, 220.032540000000000),
    (93, 221, 221.032040000000000),
    (93, 222, 222.033300000000000),
    (93, 223, 223.032850000000000),
    (93, 224, 224.034220000000000),
    (93, 225, 225.033911000000000),
    (93, 226, 226.035188000000000),
    (93, 227, 227.034957000000000),
    (93, 228, 228.036067000000000),
    (93, 229, 229.036264000000000),
    (93, 230, 230.037828000000000),
    (93, 231, 231.038245000000000),
    (93, 232, 232.040110000000000),
    (93, 233, 233.040741000000000),
    (93, 234, 234.042895300000000),
    (93, 235, 235.044063500000000),
    (93, 236, 236.046570000000000),
    (93, 238, 238.050946600000000),
    (93, 239, 239.052939200000000),
    (93, 240, 240.056165000000000),
    (93, 241, 241.058253000000000),
    (93, 242, 242.061640000000000),
    (93, 243, 243.064280000000000),
    (93, 244, 244.067850000000000),
    (93, 245, 245.070800000000000),
    (94, 228, 228.038732000000000),
    (94, 229, 229.040144000000000),
    (94, 230, 230.039650000000000),
    (94, 231, 231.041102000000000),
    (94, 232, 232.041185000000000),
    (94, 233, 233.042998000000000),
    (94, 234, 234.043317400000000),
    (94, 235, 235.045286000000000),
    (94, 236, 236.046058100000000),
    (94, 237, 237.048409800000000),
    (94, 238, 238.049560100000000),
    (94, 239, 239.052163600000000),
    (94, 240, 240.053813800000000),
    (94, 241, 241.056851700000000),
    (94, 242, 242.058742800000000),
    (94, 243, 243.062003600000000),
    (94, 245, 245.067826000000000),
    (94, 246, 246.070205000000000),
    (94, 247, 247.074190000000000),
    (95, 230, 230.046090000000000),
    (95, 231, 231.045560000000000),
    (95, 232, 232.046450000000000),
    (95, 233, 233.046440000000000),
    (95, 234, 234.047730000000000),
    (95, 235, 235.047908000000000),
    (95, 236, 236.049430000000000),
    (95, 237, 237.049996000000000),
    (95, 238, 238.051985000000000),
    (95, 239, 239.053024700000000),
    (95, 240, 240.055300000000000),
    (95, 241, 241.056829300000000),
    (95, 242, 242.059549400000000),
    (95, 244, 244.064285100000000),
    (95, 245, 245.066454800000000),
    (95, 246, 246.069775000000000),
    (95, 247, 247.072090000000000),
    (95, 248, 248.075750000000000),
    (95, 249, 249.078480000000000),
    (96, 232, 232.049820000000000),
    (96, 233, 233.050770000000000),
    (96, 234, 234.050160000000000),
    (96, 235, 235.051540000000000),
    (96, 236, 236.051374000000000),
    (96, 237, 237.052869000000000),
    (96, 238, 238.053081000000000),
    (96, 239, 239.054910000000000),
    (96, 240, 240.055529700000000),
    (96, 241, 241.057653200000000),
    (96, 242, 242.058836000000000),
    (96, 243, 243.061389300000000),
    (96, 244, 244.062752800000000),
    (96, 245, 245.065491500000000),
    (96, 246, 246.067223800000000),
    (96, 248, 248.072349900000000),
    (96, 249, 249.075954800000000),
    (96, 250, 250.078358000000000),
    (96, 251, 251.082286000000000),
    (96, 252, 252.084870000000000),
    (97, 234, 234.057270000000000),
    (97, 235, 235.056580000000000),
    (97, 236, 236.057480000000000),
    (97, 237, 237.057100000000000),
    (97, 238, 238.058200000000000),
    (97, 239, 239.058240000000000),
    (97, 240, 240.059760000000000),
    (97, 241, 241.060160000000000),
    (97, 242, 242.061980000000000),
    (97, 243, 243.063007800000000),
    (97, 244, 244.065181000000000),
    (97, 245, 245.066361800000000),
    (97, 246, 246.068673000000000),
    (97, 248, 248.073088000000000),
    (97, 249, 249.074987700000000),
    (97, 250, 250.078316700000000),
    (97, 251, 251.080762000000000),
    (97, 252, 252.084310000000000),
    (97, 253, 253.086880000000000),
    (97, 254, 254.090600000000000),
    (98, 237, 237.062198000000000),
    (98, 238, 238.061490000000000),
    (98, 239, 239.062530000000000),
    (98, 240, 240.062256000000000),
    (98, 241, 241.063690000000000),
    (98, 242, 242.063754000000000),
    (98, 243, 243.065480000000000),
    (98, 244, 244.066000800000000),
    (98, 245, 245.068048700000000),
    (98, 246, 246.068805500000000),
    (98, 247, 247.070965000000000),
    (98, 248, 248.072185100000000),
    (98, 249, 249.074853900000000),
    (98, 250, 250.076406200000000),
    (98, 252, 252.081627200000000),
    (98, 253, 253.085134500000000),
    (98, 254, 254.087324000000000),
    (98, 255, 255.091050000000000),
    (98, 256, 256.093440000000000),
    (99, 239, 239.068230000000000),
    (99, 240, 240.068920000000000),
    (99, 241, 241.068560000000000),
    (99, 242, 242.069570000000000),
    (99, 243, 243.069510000000000),
    (99, 244, 244.070880000000000),
    (99, 245, 245.071250000000000),
    (99, 246, 246.072900000000000),
    (99, 247, 247.073622000000000),
    (99, 248, 248.075471000000000),
    (99, 249, 249.076411000000000),
    (99, 250, 250.078610000000000),
    (99, 251, 251.079993600000000),
    (99, 253, 253.084825700000000),
    (99, 254, 254.088022200000000),
    (99, 255, 255.090275000000000),
    (99, 256, 256.093600000000000),
    (99, 257, 257.095980000000000),
    (99, 258, 258.099520000000000),
    (100, 241, 241.074210000000000),
    (100, 242, 242.073430000000000),
    (100, 243, 243.074460000000000),
    (100, 244, 244.074040000000000),
    (100, 245, 245.075350000000000),
    (100, 246, 246.075350000000000),
    (100, 247, 247.076940000000000),
    (100, 248, 248.077186500000000),
    (100, 249, 249.078927500000000),
    (100, 250, 250.079521000000000),
    (100, 251, 251.081540000000000),
    (100, 252, 252.082467100000000),
    (100, 253, 253.085184600000000),
    (100, 254, 254.086854400000000),
    (100, 255, 255.089964000000000),
    (100, 256, 256.091774500000000),
    (100, 258, 258.097080000000000),
    (100, 259, 259.100600000000000),
    (100, 260, 260.102810000000000),
    (101, 245, 245.080810000000000),
    (101, 246, 246.081710000000000),
    (101, 247, 247.081520000000000),
    (101, 248, 248.082820000000000),
    (101, 249, 249.082910000000000),
    (101, 250, 250.084410000000000),
    (101, 251, 251.084774000000000),
    (101, 252, 252.086430000000000),
    (101, 253, 253.087144000000000),
    (101, 254, 254.089590000000000),
    (101, 255, 255.091084100000000),
    (101, 256, 256.093890000000000),
    (101, 257, 257.095542400000000),
    (101, 259, 259.100510000000000),
    (101, 260, 260.103650000000000),
    (101, 261, 261.105830000000000),
    (101, 262, 262.109100000000000),
    (102, 248, 248.086550000000000),
    (102, 249, 249.087800000000000),
    (102, 250, 250.087560000000000),
    (102, 251, 251.088940000000000),
    (102, 252, 252.088967000000000),
    (102, 253, 253.090564100000000),
    (102, 254, 254.090956000000000),
    (102, 255, 255.093191000000000),
    (102, 256, 256.094282900000000),
    (102, 257, 257.096887800000000),
    (102, 258, 258.098210000000000),
    (102, 260, 260.102640000000000),
    (102, 261, 261.105700000000000),
    (102, 262, 262.107460000000000),
    (102, 263, 263.110710000000000),
    (102, 264, 264.112730000000000),
    (103, 251, 251.094180000000000),
    (103, 252, 252.095260000000000),
    (103, 253, 253.095090000000000),
    (103, 254, 254.096480000000000),
    (103, 255, 255.096562000000000),
    (103, 256, 256.098494000000000),
    (103, 257, 257.099418000000000),
    (103, 258, 258.101760000000000),
    (103, 259, 259.102902000000000),
    (103, 260, 260.105500000000000),
    (103, 261, 261.106880000000000),
    (103, 262, 262.109610000000000),
    (103, 263, 263.111360000000000),
    (103, 264, 264.114200000000000),
    (103, 265, 265.116190000000000),
    (104, 253, 253.100440000000000),
    (104, 254, 254.100050000000000),
    (104, 255, 255.101270000000000),
    (104, 256, 256.101152000000000),
    (104, 257, 257.102918000000000),
    (104, 258, 258.103428000000000),
    (104, 259, 259.105596000000000),
    (104, 260, 260.106440000000000),
    (104, 261, 261.108773000000000),
    (104, 262, 262.109920000000000),
    (104, 263, 263.112490000000000),
    (104, 264, 264.113880000000000),
    (104, 265, 265.116680000000000),
    (104, 266, 266.118170000000000),
    (104, 268, 268.123970000000000),
    (105, 255, 255.107070000000000),
    (105, 256, 256.107890000000000),
    (105, 257, 257.107580000000000),
    (105, 258, 258.109280000000000),
    (105, 259, 259.109492000000000),
    (105, 260, 260.111300000000000),
    (105, 261, 261.111920000000000),
    (105, 262, 262.114070000000000),
    (105, 263, 263.114990000000000),
    (105, 264, 264.117410000000000),
    (105, 265, 265.118610000000000),
    (105, 266, 266.121030000000000),
    (105, 267, 267.122470000000000),
    (105, 269, 269.127910000000000),
    (105, 270, 270.131360000000000),
    (106, 258, 258.112980000000000),
    (106, 259, 259.114400000000000),
    (106, 260, 260.114384000000000),
    (106, 261, 261.115949000000000),
    (106, 262, 262.116337000000000),
    (106, 263, 263.118290000000000),
    (106, 264, 264.118930000000000),
    (106, 265, 265.121090000000000),
    (106, 266, 266.121980000000000),
    (106, 267, 267.124360000000000),
    (106, 268, 268.125390000000000),
    (106, 270, 270.130430000000000),
    (106, 271, 271.133930000000000),
    (106, 272, 272.135890000000000),
    (106, 273, 273.139580000000000),
    (107, 260, 260.121660000000000),
    (107, 261, 261.121450000000000),
    (107, 262, 262.122970000000000),
    (107, 263, 263.122920000000000),
    (107, 264, 264.124590000000000),
    (107, 265, 265.124910000000000),
    (107, 266, 266.126790000000000),
    (107, 267, 267.127500000000000),
    (107, 268, 268.129690000000000),
    (107, 269, 269.130420000000000),
    (107, 271, 271.135260000000000),
    (107, 272, 272.138260000000000),
    (107, 273, 273.140240000000000),
    (107, 274, 274.143550000000000),
    (107, 275, 275.145670000000000),
    (108, 263, 263.128520000000000),
    (108, 264, 264.128357000000000),
    (108, 265, 265.129793000000000),
    (108, 266, 266.130046000000000),
    (108, 267, 267.131670000000000),
    (108, 268, 268.131860000000000),
    (108, 269, 269.133750000000000),
    (108, 271, 271.137170000000000),
    (108, 272, 272.138500000000000),
    (108, 273, 273.141680000000000),
    (108, 274, 274.143300000000000),
    (108, 275, 275.146670000000000),
    (108, 276, 276.148460000000000),
    (108, 277, 277.151900000000000),
    (109, 265, 265.136000000000000),
    (109, 266, 266.137370000000000),
    (109, 267, 267.137190000000000),
    (109, 268, 268.138650000000000),
    (109, 269, 269.138820000000000),
    (109, 270, 270.140330000000000),
    (109, 271, 271.140740000000000),
    (109, 272, 272.143410000000000),
    (109, 273, 273.144400000000000),
    (109, 274, 274.147240000000000),
    (109, 275, 275.148820000000000),
    (109, 276, 276.151590000000000),
    (109, 277, 277.153270000000000),
    (109, 279, 279.158080000000000),
    (110, 267, 267.143770000000000),
    (110, 268, 268.143480000000000),
    (110, 269, 269.144752000000000),
    (110, 270, 270.144584000000000),
    (110, 271, 271.145950000000000),
    (110, 272, 272.146020000000000),
    (110, 273, 273.148560000000000),
    (110, 274, 274.149410000000000),
    (110, 275, 275.152030000000000),
    (110, 276, 276.153030000000000),
    (110, 277, 277.155910000000000),
    (110, 278, 278.157040000000000),
    (110, 279, 279.160100000000000),
    (110, 280, 280.161310000000000),
    (111, 272, 272.153270000000000),
    (111, 273, 273.153130000000000),
    (111, 274, 274.155250000000000),
    (111, 275, 275.155940000000000),
    (111, 276, 276.158330000000000),
    (111, 277, 277.159070000000000),
    (111, 278, 278.161490000000000),
    (111, 279, 279.162720000000000),
    (111, 280, 280.165140000000000),
    (111, 281, 281.166360000000000),
    (111, 283, 283.170540000000000),
    (112, 276, 276.161410000000000),
    (112, 277, 277.163640000000000),
    (112, 278, 278.164160000000000),
    (112, 279, 279.166540000000000),
    (112, 280, 280.167150000000000),
    (112, 281, 281.169750000000000),
    (112, 282, 282.170500000000000),
    (112, 283, 283.173270000000000),
    (112, 284, 284.174160000000000),
    (113, 278, 278.170580000000000),
    (113, 279, 279.170950000000000),
    (113, 280, 280.172930000000000),
    (113, 281, 281.173480000000000),
    (113, 282, 282.175670000000000),
    (113, 283, 283.176570000000000),
    (113, 284, 284.178730000000000),
    (113, 285, 285.179730000000000),
    (113, 287, 287.183390000000000),
    (114, 285, 285.183640000000000),
    (114, 286, 286.184230000000000),
    (114, 287, 287.186780000000000),
    (114, 288, 288.187570000000000),
    (115, 287, 287.190700000000000),
    (115, 288, 288.192740000000000),
    (115, 289, 289.193630000000000),
    (115, 291, 291.197070000000000),
    (116, 289, 289.198160000000000),
    (116, 290, 290.198640000000000),
    (116, 291, 291.201080000000000),
    (116, 292, 292.201740000000000),
    (117, 291, 291.205530000000000),
    (117, 292, 292.207460000000000),
    (117, 293, 293.208240000000000),
    (118, 293, 293.213560000000000),
    (118, 295, 295.216240000000000),
];
